extern crate proc_macro;

mod commandsgen;

use proc_macro::TokenStream;
use commandsgen::define_commands_impl;

/// Builds a `static` command table for `linecmd_core::Dispatcher`.
///
/// ```ignore
/// define_commands! {
///     pub static COMMANDS;
///     "help"   => crate::handlers::help,   "Show this help";
///     "status" => crate::handlers::status, "LED mode: 0 off, 1 on, 2 flash";
///     "test"   => crate::handlers::test;
/// }
/// ```
///
/// Expands to `pub static COMMANDS: &[linecmd_core::Command<'static>]` and
/// `pub const COMMANDS_LEN: usize`. Entries keep their source order.
/// Duplicate names, empty names and names containing `;`, `,`, NUL or
/// whitespace are compile errors.
#[proc_macro]
pub fn define_commands(input: TokenStream) -> TokenStream {
    define_commands_impl(input)
}
