use regex::Regex;

/// Sanitize a title so it is safe as a filesystem path component.
/// Every forbidden character becomes `_`; everything else is untouched.
pub fn sanitize_title(title: &str) -> String {
    let forbidden = Regex::new(r#"[\\/*?:"<>|]"#).unwrap();
    forbidden.replace_all(title, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_forbidden_character() {
        assert_eq!(sanitize_title(r#"a\b/c*d?e:f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn leaves_other_characters_unchanged() {
        assert_eq!(sanitize_title("Lo-fi Beats (24/7)"), "Lo-fi Beats (24_7)");
        assert_eq!(sanitize_title("日本語タイトル"), "日本語タイトル");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn is_idempotent() {
        let once = sanitize_title(r#"Weird:Title?"#);
        assert_eq!(once, "Weird_Title_");
        assert_eq!(sanitize_title(&once), once);
    }
}
