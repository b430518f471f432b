//! Small ordered classifier for greetings, thanks and farewells.

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicIntent {
    Greeting,
    Thanks,
    Farewell,
}

static GREETING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^hi\b|^hello\b|^hay\b|^halo\b").expect("static greeting regex"));
static THANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"thank|thanks|terima kasih").expect("static thanks regex"));
static FAREWELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"bye|goodbye|sampai jumpa").expect("static farewell regex"));

/// First matching intent on the lower-cased message, checked in the order
/// greeting, thanks, farewell.
pub fn classify_basic(message: &str) -> Option<BasicIntent> {
    let lower = message.to_lowercase();
    if GREETING.is_match(&lower) {
        Some(BasicIntent::Greeting)
    } else if THANKS.is_match(&lower) {
        Some(BasicIntent::Thanks)
    } else if FAREWELL.is_match(&lower) {
        Some(BasicIntent::Farewell)
    } else {
        None
    }
}

impl BasicIntent {
    pub fn canned_reply(self) -> &'static str {
        match self {
            BasicIntent::Greeting => {
                "Halo! Saya PregnaAI, asisten AI yang siap membantu Anda seputar kehamilan. \
                 Saya dapat memberikan informasi tentang kesehatan ibu hamil, memberikan saran nutrisi, \
                 dan menjawab pertanyaan umum seputar kehamilan. Apa yang ingin Anda ketahui?"
            }
            BasicIntent::Thanks => {
                "Sama-sama! Senang bisa membantu Anda. Jangan ragu untuk bertanya lagi jika \
                 Anda memiliki pertanyaan lain seputar kehamilan."
            }
            BasicIntent::Farewell => {
                "Sampai jumpa! Jaga kesehatan Anda dan bayi. Jangan lupa untuk rutin \
                 melakukan pemeriksaan dan mengisi DailyCheckup Anda."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_only_at_start() {
        assert_eq!(classify_basic("Halo PregnaAI"), Some(BasicIntent::Greeting));
        assert_eq!(classify_basic("hi"), Some(BasicIntent::Greeting));
        assert_eq!(classify_basic("bilang halo ke dokter"), None);
        assert_eq!(classify_basic("highlight"), None);
    }

    #[test]
    fn thanks_and_farewell_match_anywhere() {
        assert_eq!(classify_basic("Oke, Terima Kasih ya"), Some(BasicIntent::Thanks));
        assert_eq!(classify_basic("thanks!"), Some(BasicIntent::Thanks));
        assert_eq!(classify_basic("oke bye"), Some(BasicIntent::Farewell));
        assert_eq!(classify_basic("sampai jumpa besok"), Some(BasicIntent::Farewell));
    }

    #[test]
    fn greeting_wins_over_later_categories() {
        assert_eq!(
            classify_basic("halo, terima kasih sebelumnya"),
            Some(BasicIntent::Greeting)
        );
        assert_eq!(classify_basic("thanks, bye"), Some(BasicIntent::Thanks));
    }

    #[test]
    fn medical_question_is_not_basic() {
        assert_eq!(classify_basic("Apakah aman minum kopi saat hamil?"), None);
    }

    #[test]
    fn canned_replies_are_distinct() {
        assert!(BasicIntent::Greeting.canned_reply().starts_with("Halo!"));
        assert!(BasicIntent::Thanks.canned_reply().starts_with("Sama-sama!"));
        assert!(BasicIntent::Farewell.canned_reply().contains("DailyCheckup"));
    }
}
