#[cfg(test)]
mod tests {
    use ming::{Argument, Arguments, Error, Flavor, Template, TemplateOptions};
    use serde_json::json;
    use test_log::test;

    const MODULE: &str = r#"
        // @ming MODEL model name used in identifiers
        // @ming FIELDS statements that initialize fields
        // @ming DEFAULTS default field values
        function create$MODEL$(input) {
            var model = { kind: '$MODEL$' };
            $FIELDS$;
            return Object.assign({}, $DEFAULTS$, model);
        }
        module.exports.create$MODEL$ = create$MODEL$;
    "#;

    /// Canonical form of `code`: regenerated without placeholders and with
    /// one quote style, so only structure is compared.
    fn canonical(code: &str) -> String {
        Template::new(code).unwrap().render(&json!({})).unwrap().replace('\'', "\"")
    }

    fn assert_same_code(actual: &str, expected: &str) {
        assert_eq!(canonical(actual), canonical(expected), "actual output:\n{actual}");
    }

    #[test]
    fn test_placeholders_keep_declaration_order() {
        let template = Template::new(MODULE).unwrap();
        let names: Vec<_> = template.placeholders().iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["MODEL", "FIELDS", "DEFAULTS"]);
        assert_eq!(template.placeholders().description("DEFAULTS"), Some("default field values"));
    }

    #[test]
    fn test_render_module() {
        let template = Template::new(MODULE).unwrap();
        let result = template
            .render(&json!({
                "MODEL": "User",
                "FIELDS": "model.name = input.name; model.age = input.age | 0;",
                "DEFAULTS": "({ name: 'anonymous', age: 0 })"
            }))
            .unwrap();

        assert_same_code(
            &result,
            r#"
            function createUser(input) {
                var model = { kind: 'User' };
                {
                    model.name = input.name;
                    model.age = input.age | 0;
                }
                return Object.assign({}, ({ name: 'anonymous', age: 0 }), model);
            }
            module.exports.createUser = createUser;
            "#,
        );
    }

    #[test]
    fn test_flavor_mapping() {
        let template = Template::new(MODULE).unwrap();
        let result = template
            .render(&json!({
                "MODEL": { "default": "Order", "literal": "order" },
                "FIELDS": { "statement": "model.total = input.total;" },
                "DEFAULTS": { "expression": "var d = {}; d.total = 0; return d;" }
            }))
            .unwrap();

        assert_same_code(
            &result,
            r#"
            function createOrder(input) {
                var model = { kind: 'order' };
                model.total = input.total;
                return Object.assign({}, (function () {
                    var d = {};
                    d.total = 0;
                    return d;
                })(), model);
            }
            module.exports.createOrder = createOrder;
            "#,
        );
    }

    #[test]
    fn test_missing_argument_produces_no_output() {
        let template = Template::new(MODULE).unwrap();
        let result = template.render(&json!({ "MODEL": "User", "FIELDS": "x();" }));
        match result {
            Err(Error::MissingArgumentError { name }) => assert_eq!(name, "DEFAULTS"),
            other => panic!("expected a missing argument error, got {other:?}"),
        }
    }

    #[test]
    fn test_template_is_shared_between_threads() {
        let template = Template::new(MODULE).unwrap();
        let args = json!({
            "MODEL": "User",
            "FIELDS": "a(); b();",
            "DEFAULTS": "({})"
        });
        let expected = template.render(&args).unwrap();

        let outputs: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| template.render(&args).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(outputs.iter().all(|out| *out == expected));
    }

    #[test]
    fn test_template_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Template>();
    }

    #[test]
    fn test_prepared_arguments() {
        let template = Template::new(
            "// @ming HANDLER h\n// @ming EVENT e\non('$EVENT$', $HANDLER$);",
        )
        .unwrap();
        let mut args = Arguments::new();
        args.insert("EVENT".to_string(), Argument::text("click"));
        args.insert(
            "HANDLER".to_string(),
            Argument::from_flavors([(Flavor::Expression, "function onClick(e) { e.stop(); }")]),
        );
        let result = template.render_arguments(&args).unwrap();
        assert_same_code(&result, "on('click', (function onClick(e) { e.stop(); }));");
    }

    #[test]
    fn test_options_from_yaml() {
        let options = TemplateOptions::from_yaml("substitution: first\nminify: true\n").unwrap();
        let template =
            Template::with_options("// @ming N n\nvar s = '$N$/$N$';", options).unwrap();
        let result = template.render(&json!({ "N": "a" })).unwrap();
        assert_same_code(&result, "var s = 'a/$N$';");
    }

    #[test]
    fn test_errors_separate_authoring_from_call_site() {
        let err = Template::new("var = ;").unwrap_err();
        assert!(err.is_construction_error());

        let template = Template::new("// @ming N n\n$N$;").unwrap();
        let err = template.render(&json!({ "N": { "expression": "x" } })).unwrap_err();
        assert!(matches!(err, Error::UndefinedFlavorError { flavor: Flavor::Statement }));
        assert!(!err.is_construction_error());
    }
}
