// SPDX-License-Identifier: GPL-3.0-only

//! Minimal shader-source preprocessor
//!
//! Supports one directive: a line whose first whitespace-delimited token is
//! `#include "path"` is replaced by the fully-preprocessed content of that
//! asset. Cycles are detected through the whole include chain, not just
//! immediate self-inclusion, so a file pulled in by its own includee fails
//! cleanly. A file included
//! from two sibling files is spliced twice; include guards are the asset
//! author's responsibility.
//!
//! Macro injection prepends `#define KEY VALUE` lines before the body, so
//! assets must not start with a `#version` directive of their own.

use super::assets::ShaderAssets;
use crate::errors::{RenderError, RenderResult};
use std::fmt::Write as _;

/// Read the named asset and splice all `#include` directives recursively.
pub fn preprocess(assets: &dyn ShaderAssets, path: &str) -> RenderResult<String> {
    let mut stack = Vec::new();
    expand(assets, path, &mut stack)
}

/// Preprocess the named asset and prepend one `#define KEY VALUE` line per
/// entry, in slice order.
pub fn assemble(
    assets: &dyn ShaderAssets,
    path: &str,
    defines: &[(&str, &str)],
) -> RenderResult<String> {
    let body = preprocess(assets, path)?;
    let mut out = String::with_capacity(body.len());
    for (key, value) in defines {
        let _ = writeln!(out, "#define {} {}", key, value);
    }
    out.push_str(&body);
    Ok(out)
}

fn expand(assets: &dyn ShaderAssets, path: &str, stack: &mut Vec<String>) -> RenderResult<String> {
    if stack.iter().any(|p| p == path) {
        return Err(RenderError::IncludeCycle {
            path: path.to_string(),
        });
    }
    stack.push(path.to_string());

    let source = assets.source(path)?;
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        if line.split_whitespace().next() == Some("#include") {
            let target =
                parse_include_target(line).ok_or_else(|| RenderError::MalformedInclude {
                    path: path.to_string(),
                    line: line.trim().to_string(),
                })?;
            out.push_str(&expand(assets, target, stack)?);
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }

    stack.pop();
    Ok(out)
}

/// Extract the quoted target from an `#include "path"` line.
fn parse_include_target(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("#include")?.trim();
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;
    let target = &rest[..end];
    // Nothing but the directive may appear on the line
    if !rest[end + 1..].trim().is_empty() {
        return None;
    }
    if target.is_empty() { None } else { Some(target) }
}

#[cfg(test)]
mod tests {
    use super::super::assets::MemoryShaderAssets;
    use super::*;

    fn assets(entries: &[(&str, &str)]) -> MemoryShaderAssets {
        let mut assets = MemoryShaderAssets::new();
        for (path, source) in entries {
            assets.insert(*path, *source);
        }
        assets
    }

    #[test]
    fn test_plain_passthrough() {
        let assets = assets(&[("a.frag", "void main() {}\n")]);
        assert_eq!(preprocess(&assets, "a.frag").unwrap(), "void main() {}\n");
    }

    #[test]
    fn test_include_splice() {
        let assets = assets(&[
            ("a.frag", "// head\n#include \"lib.glsl\"\n// tail\n"),
            ("lib.glsl", "float f() { return 1.0; }\n"),
        ]);
        let out = preprocess(&assets, "a.frag").unwrap();
        assert_eq!(out, "// head\nfloat f() { return 1.0; }\n// tail\n");
    }

    #[test]
    fn test_include_must_be_first_token() {
        let assets = assets(&[("a.frag", "// #include \"lib.glsl\"\n")]);
        let out = preprocess(&assets, "a.frag").unwrap();
        assert!(out.contains("#include"), "commented directive is kept verbatim");
    }

    #[test]
    fn test_indented_include() {
        let assets = assets(&[
            ("a.frag", "  #include \"lib.glsl\"\n"),
            ("lib.glsl", "int x;\n"),
        ]);
        assert_eq!(preprocess(&assets, "a.frag").unwrap(), "int x;\n");
    }

    #[test]
    fn test_self_include_cycle() {
        let assets = assets(&[("a.frag", "#include \"a.frag\"\n")]);
        match preprocess(&assets, "a.frag") {
            Err(RenderError::IncludeCycle { path }) => assert_eq!(path, "a.frag"),
            other => panic!("expected IncludeCycle, got {:?}", other),
        }
    }

    #[test]
    fn test_two_hop_cycle() {
        let assets = assets(&[
            ("a.frag", "#include \"b.glsl\"\n"),
            ("b.glsl", "#include \"a.frag\"\n"),
        ]);
        match preprocess(&assets, "a.frag") {
            Err(RenderError::IncludeCycle { path }) => assert_eq!(path, "a.frag"),
            other => panic!("expected IncludeCycle, got {:?}", other),
        }
    }

    #[test]
    fn test_diamond_include_is_allowed() {
        let assets = assets(&[
            ("a.frag", "#include \"b.glsl\"\n#include \"c.glsl\"\n"),
            ("b.glsl", "#include \"d.glsl\"\n"),
            ("c.glsl", "#include \"d.glsl\"\n"),
            ("d.glsl", "int d;\n"),
        ]);
        let out = preprocess(&assets, "a.frag").unwrap();
        assert_eq!(out.matches("int d;").count(), 2);
    }

    #[test]
    fn test_missing_include_target() {
        let assets = assets(&[("a.frag", "#include \"nope.glsl\"\n")]);
        match preprocess(&assets, "a.frag") {
            Err(RenderError::AssetNotFound { path }) => assert_eq!(path, "nope.glsl"),
            other => panic!("expected AssetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_include() {
        let assets = assets(&[("a.frag", "#include lib.glsl\n")]);
        assert!(matches!(
            preprocess(&assets, "a.frag"),
            Err(RenderError::MalformedInclude { .. })
        ));
    }

    #[test]
    fn test_defines_prepended_in_order() {
        let assets = assets(&[("a.frag", "void main() {}\n")]);
        let out = assemble(&assets, "a.frag", &[("FOO", "1"), ("BAR", "2")]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "#define FOO 1");
        assert_eq!(lines[1], "#define BAR 2");
        assert_eq!(lines[2], "void main() {}");
        assert_eq!(out.matches("#define").count(), 2);
    }

    #[test]
    fn test_defines_precede_included_body() {
        let assets = assets(&[
            ("a.frag", "#include \"lib.glsl\"\n"),
            ("lib.glsl", "int x;\n"),
        ]);
        let out = assemble(&assets, "a.frag", &[("N", "4")]).unwrap();
        assert_eq!(out, "#define N 4\nint x;\n");
    }
}
