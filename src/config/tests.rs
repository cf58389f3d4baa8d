//! Tests for the config module

#[cfg(test)]
mod tests {
    use crate::config::{DuplicatePolicy, SubstitutionPolicy, TemplateOptions};
    use crate::error::Error;

    #[test]
    fn it_uses_defaults_for_an_empty_document() {
        let options = TemplateOptions::from_json("{}").unwrap();
        assert_eq!(options, TemplateOptions::default());
        assert_eq!(options.directive, "@ming");
        assert_eq!(options.substitution, SubstitutionPolicy::All);
        assert_eq!(options.duplicates, DuplicatePolicy::LastWins);
        assert!(!options.minify);
    }

    #[test]
    fn it_reads_json() {
        let options = TemplateOptions::from_json(
            r#"{"directive": "@tpl", "substitution": "first", "duplicates": "error", "minify": true}"#,
        )
        .unwrap();
        assert_eq!(options.directive, "@tpl");
        assert_eq!(options.substitution, SubstitutionPolicy::First);
        assert_eq!(options.duplicates, DuplicatePolicy::Error);
        assert!(options.minify);
    }

    #[test]
    fn it_reads_yaml() {
        let options = TemplateOptions::from_yaml(
            "directive: \"@slot\"\nsubstitution: first\n",
        )
        .unwrap();
        assert_eq!(options.directive, "@slot");
        assert_eq!(options.substitution, SubstitutionPolicy::First);
        assert_eq!(options.duplicates, DuplicatePolicy::LastWins);
    }

    #[test]
    fn it_rejects_an_empty_directive() {
        let err = TemplateOptions::from_json(r#"{"directive": ""}"#).unwrap_err();
        assert!(matches!(err, Error::OptionsValidationError(_)));
        assert!(err.is_construction_error());
    }

    #[test]
    fn it_rejects_a_directive_with_whitespace() {
        let err = TemplateOptions::from_yaml("directive: \"@a b\"").unwrap_err();
        assert!(matches!(err, Error::OptionsValidationError(_)));
    }

    #[test]
    fn it_reports_malformed_documents() {
        let err = TemplateOptions::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::OptionsParseError(_)));

        let err = TemplateOptions::from_json(r#"{"substitution": "most"}"#).unwrap_err();
        assert!(matches!(err, Error::OptionsParseError(_)));
    }
}
