//! # Command Table Macro
//!
//! Parses
//!
//! ```text
//! [vis] static NAME;
//! "name" => path::to::handler [, "description"];
//! ...
//! ```
//!
//! and emits a `static` slice of `linecmd_core::Command` plus its length.
//! Every handler is cast to `linecmd_core::HandlerFn`, so a handler with the
//! wrong signature fails to compile at the entry that names it.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Ident, LitStr, Result, Token, Visibility, parse::Parse, parse::ParseStream, parse_macro_input};

/// Bytes a command name may not contain. Default delimiters and the terminator
/// can never reach the lookup, whitespace is stripped by most terminals.
const RESERVED: &[u8] = b";,\0 \t\r\n";

/// Parsed macro input.
struct CommandsInput {
    vis: Visibility,
    ident: Ident,
    entries: Vec<EntryInput>,
}

/// One `"name" => path, "description";` line.
struct EntryInput {
    name: LitStr,
    path: syn::Path,
    description: Option<LitStr>,
}

impl Parse for CommandsInput {
    fn parse(input: ParseStream) -> Result<Self> {
        // Expect: `[vis] static <ident>;`
        let vis: Visibility = input.parse()?;
        input.parse::<Token![static]>()?;
        let ident: Ident = input.parse()?;
        input.parse::<Token![;]>()?;

        let mut entries = Vec::new();
        while !input.is_empty() {
            let name: LitStr = input.parse()?;
            input.parse::<Token![=>]>()?;
            let path: syn::Path = input.parse()?;
            let description = if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
                Some(input.parse::<LitStr>()?)
            } else {
                None
            };
            input.parse::<Token![;]>()?;
            entries.push(EntryInput { name, path, description });
        }

        Ok(CommandsInput { vis, ident, entries })
    }
}

pub fn define_commands_impl(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as CommandsInput);
    match expand(parsed) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: CommandsInput) -> Result<TokenStream2> {
    let CommandsInput { vis, ident, entries } = input;

    let names: Vec<String> = entries.iter().map(|e| e.name.value()).collect();
    for (entry, name) in entries.iter().zip(&names) {
        if let Err(msg) = validate_name(name) {
            return Err(syn::Error::new(entry.name.span(), msg));
        }
    }
    if let Some((first, dup)) = find_duplicate(&names) {
        return Err(syn::Error::new(
            entries[dup].name.span(),
            format!("duplicate command name `{}` (first defined as entry {})", names[dup], first),
        ));
    }

    let inits = entries.iter().map(|e| {
        let name = &e.name;
        let path = &e.path;
        let description = e
            .description
            .clone()
            .unwrap_or_else(|| LitStr::new("", e.name.span()));
        quote! {
            ::linecmd_core::Command::with_description(
                #name,
                #path as ::linecmd_core::HandlerFn,
                #description,
            )
        }
    });

    let len = entries.len();
    let len_ident = format_ident!("{}_LEN", ident);

    Ok(quote! {
        /// Command table generated by `define_commands!`, in source order.
        #vis static #ident: &[::linecmd_core::Command<'static>] = &[
            #( #inits ),*
        ];

        /// Number of entries in the generated command table.
        #vis const #len_ident: usize = #len;
    })
}

/// Rejects names the tokenizer could never produce.
fn validate_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("command name must not be empty".into());
    }
    if !name.is_ascii() {
        return Err(format!("command name `{name}` must be ASCII"));
    }
    if let Some(b) = name.bytes().find(|b| RESERVED.contains(b)) {
        return Err(format!(
            "command name `{}` contains reserved character {:?}",
            name.escape_default(),
            b as char
        ));
    }
    Ok(())
}

/// First `(earlier, later)` index pair with equal names.
fn find_duplicate(names: &[String]) -> Option<(usize, usize)> {
    names.iter().enumerate().find_map(|(later, name)| {
        names[..later].iter().position(|n| n == name).map(|first| (first, later))
    })
}

// ================= TESTS ==========================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> CommandsInput {
        syn::parse_str(src).expect("input should parse")
    }

    #[test]
    fn parses_entries_with_and_without_description() {
        let input = parse(
            r#"pub static COMMANDS;
               "help"   => crate::h::help, "Show help";
               "status" => crate::h::status;"#,
        );
        assert_eq!(input.ident, "COMMANDS");
        assert!(matches!(input.vis, Visibility::Public(_)));
        assert_eq!(input.entries.len(), 2);
        assert_eq!(input.entries[0].name.value(), "help");
        assert_eq!(input.entries[0].description.as_ref().map(LitStr::value).as_deref(), Some("Show help"));
        assert!(input.entries[1].description.is_none());
    }

    #[test]
    fn parses_empty_table() {
        let input = parse("static NONE;");
        assert!(matches!(input.vis, Visibility::Inherited));
        assert!(input.entries.is_empty());
    }

    #[test]
    fn rejects_missing_semicolon() {
        assert!(syn::parse_str::<CommandsInput>(r#"static T; "a" => f"#).is_err());
    }

    #[test]
    fn expands_to_static_slice_and_len() {
        let out = expand(parse(r#"static T; "a" => f; "b" => g, "bee";"#)).unwrap().to_string();
        assert!(out.contains("static T"));
        assert!(out.contains("const T_LEN : usize = 2usize"));
        assert!(out.contains("HandlerFn"));
        assert!(out.contains("\"bee\""));
    }

    #[test]
    fn duplicate_is_an_error() {
        let err = expand(parse(r#"static T; "a" => f; "b" => g; "a" => h;"#)).err().unwrap();
        assert!(err.to_string().contains("duplicate command name `a` (first defined as entry 0)"));
    }

    #[test]
    fn validates_names() {
        assert!(validate_name("status").is_ok());
        assert!(validate_name("enable_null").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("a;b").is_err());
        assert!(validate_name("a,b").is_err());
        assert!(validate_name("a b").is_err());
        assert!(validate_name("caf\u{e9}").is_err());
    }

    #[test]
    fn finds_first_duplicate_pair() {
        let names: Vec<String> = ["x", "y", "z", "y", "x"].iter().map(|s| s.to_string()).collect();
        assert_eq!(find_duplicate(&names), Some((1, 3)));
        assert_eq!(find_duplicate(&names[..3]), None);
    }
}
