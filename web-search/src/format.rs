use crate::types::SearchResult;

/// Renders results as `title\nbody\nlink` blocks separated by newlines.
pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}\n{}\n{}", r.title, r.body, r.link))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_result_on_three_lines() {
        let results = vec![
            SearchResult {
                title: "Mual di trimester pertama".into(),
                body: "Mual umum terjadi.".into(),
                link: "https://a.example/mual".into(),
            },
            SearchResult {
                title: "Tips".into(),
                body: "Makan sedikit tapi sering.".into(),
                link: "https://b.example/tips".into(),
            },
        ];
        assert_eq!(
            format_results(&results),
            "Mual di trimester pertama\nMual umum terjadi.\nhttps://a.example/mual\n\
             Tips\nMakan sedikit tapi sering.\nhttps://b.example/tips"
        );
    }

    #[test]
    fn empty_results_format_to_empty_string() {
        assert_eq!(format_results(&[]), "");
    }
}
