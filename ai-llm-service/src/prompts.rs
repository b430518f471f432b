//! System instructions for both tiers. The context string is interpolated
//! at the end of each persona.

const STANDARD_PERSONA: &str = "Anda adalah PregnaAI, asisten ramah untuk ibu hamil. \
Berikan respons yang hangat dan supportif. \
Gunakan bahasa yang sederhana dan mudah dipahami. \
Fokus pada memberikan informasi tentang fitur platform dan dukungan umum. \
Jika ada pertanyaan medis spesifik, sarankan untuk mengaktifkan web search \
atau berkonsultasi dengan dokter.";

const PREMIUM_PERSONA: &str = "Anda adalah asisten kesehatan premium yang berfokus pada kesejahteraan fisik dan mental. \
Spesialisasi anda mencakup:\n\
1. Kesehatan mental dan manajemen stress\n\
2. Pemantauan kesehatan real-time dan gaya hidup sehat\n\
3. Pencegahan penyakit dan perawatan kesehatan preventif\n\
4. Panduan aktivitas fisik dan nutrisi\n\n\
Berikan jawaban komprehensif dalam Bahasa Indonesia yang mudah dipahami. \
Gunakan konteks dokumen sebagai referensi utama dan tambahkan wawasan medis \
terkini jika relevan.";

/// Standard-tier system message.
pub fn standard_system_prompt(context: &str) -> String {
    format!("{STANDARD_PERSONA}\n\nKonteks Platform: {context}")
}

/// Premium-tier system message.
pub fn premium_system_prompt(context: &str) -> String {
    format!("{PREMIUM_PERSONA}\n\nKonteks: {context}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_interpolated_last() {
        let s = standard_system_prompt("CTX-A");
        assert!(s.starts_with("Anda adalah PregnaAI"));
        assert!(s.ends_with("Konteks Platform: CTX-A"));

        let p = premium_system_prompt("CTX-B");
        assert!(p.contains("1. Kesehatan mental"));
        assert!(p.ends_with("Konteks: CTX-B"));
    }
}
