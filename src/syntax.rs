//! Thin adapters over the swc parser and code generator.
//!
//! Every tree handed out by this module has its source positions replaced by
//! dummy spans. Templates and arguments are parsed from unrelated source maps
//! and then mixed into one tree, so no span in a working tree could be trusted
//! by the emitter anyway.

use crate::constants::NEW_LINE;
use crate::error::Result;
use swc_core::common::comments::{CommentKind, SingleThreadedComments};
use swc_core::common::{sync::Lrc, FileName, SourceMap, Span, Spanned, DUMMY_SP};
use swc_core::ecma::ast::{EsVersion, Script};
use swc_core::ecma::codegen::{text_writer::JsWriter, Config, Emitter};
use swc_core::ecma::parser::{error::Error as SyntaxError, parse_file_as_script};
use swc_core::ecma::parser::{EsSyntax, Syntax};
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

/// A parsed script together with the text of its line comments.
pub(crate) struct ParsedScript {
    pub script: Script,
    /// Line comment bodies (without the leading `//`), in source order.
    pub line_comments: Vec<String>,
}

/// Parses `source` as a classic script.
///
/// `allow_return` accepts `return` outside of a function body, which is what a
/// statement list that ends up wrapped in a closure needs.
///
/// # Returns
/// * `Ok(ParsedScript)` - The span-less tree and its line comments
/// * `Err(String)` - A human readable description of the first syntax error
pub(crate) fn parse_script(
    source: &str,
    allow_return: bool,
) -> std::result::Result<ParsedScript, String> {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(FileName::Anon.into(), source.to_string());
    let comments = SingleThreadedComments::default();
    let syntax = Syntax::Es(EsSyntax {
        allow_return_outside_function: allow_return,
        ..Default::default()
    });

    let mut recovered = Vec::new();
    let mut script = parse_file_as_script(
        &fm,
        syntax,
        EsVersion::latest(),
        Some(&comments),
        &mut recovered,
    )
    .map_err(|err| describe_syntax_error(&cm, err))?;
    if let Some(err) = recovered.into_iter().next() {
        return Err(describe_syntax_error(&cm, err));
    }

    let line_comments = {
        let (leading, trailing) = comments.borrow_all();
        let mut lines: Vec<_> = leading
            .values()
            .chain(trailing.values())
            .flatten()
            .filter(|comment| matches!(comment.kind, CommentKind::Line))
            .map(|comment| (comment.span.lo, comment.text.to_string()))
            .collect();
        lines.sort_by_key(|(pos, _)| *pos);
        lines.into_iter().map(|(_, text)| text).collect()
    };

    script.visit_mut_with(&mut DropSpan);
    Ok(ParsedScript { script, line_comments })
}

fn describe_syntax_error(cm: &SourceMap, err: SyntaxError) -> String {
    let span = err.span();
    let message = err.kind().msg();
    if span.is_dummy() {
        return message.to_string();
    }
    let loc = cm.lookup_char_pos(span.lo);
    format!("{message} (line {}, column {})", loc.line, loc.col.0 + 1)
}

/// Regenerates source text from a tree.
///
/// Comments are not emitted. Trailing whitespace is trimmed.
pub(crate) fn generate(script: &Script, minify: bool) -> Result<String> {
    let cm: Lrc<SourceMap> = Default::default();
    let mut buf = Vec::new();
    {
        let wr = JsWriter::new(cm.clone(), NEW_LINE, &mut buf, None);
        let mut emitter = Emitter {
            cfg: Config::default()
                .with_minify(minify)
                .with_target(EsVersion::latest()),
            cm,
            comments: None,
            wr,
        };
        emitter.emit_script(script)?;
    }
    let code = String::from_utf8(buf)?;
    Ok(code.trim_end().to_string())
}

/// Resets every span of a tree to `DUMMY_SP`.
pub(crate) struct DropSpan;

impl VisitMut for DropSpan {
    fn visit_mut_span(&mut self, span: &mut Span) {
        *span = DUMMY_SP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collects_line_comments_in_order() {
        let parsed = parse_script(
            "// first\n/* block */\nfoo(); // second\n// third\nbar();",
            false,
        )
        .unwrap();
        assert_eq!(parsed.line_comments, vec![" first", " second", " third"]);
        assert_eq!(parsed.script.body.len(), 2);
    }

    #[test]
    fn test_parse_reports_position() {
        let err = parse_script("var = 1;", false).err().unwrap();
        assert!(err.contains("line 1"), "{err}");
    }

    #[test]
    fn test_return_outside_function() {
        assert!(parse_script("return 1;", false).is_err());
        assert!(parse_script("return 1;", true).is_ok());
    }

    #[test]
    fn test_generate_drops_comments() {
        let parsed = parse_script("// note\nfoo(1);", false).unwrap();
        let code = generate(&parsed.script, false).unwrap();
        assert_eq!(code, "foo(1);");
    }

    #[test]
    fn test_generate_is_stable() {
        let parsed = parse_script("function f(a){return a+1}", false).unwrap();
        let first = generate(&parsed.script, false).unwrap();
        let again = parse_script(&first, false).unwrap();
        assert_eq!(generate(&again.script, false).unwrap(), first);
    }
}
