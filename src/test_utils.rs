use proptest::prelude::*;

/// Generates strings with a mix of ASCII, whitespace, punctuation and
/// multi-byte characters
pub fn arb_messy_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9_-]{1,24}",
        "[ \\t]{0,3}[a-z]{1,8}[ \\t]{0,3}",
        "[!-/:-@\\[-`{-~]{1,8}",
        "\\PC{0,16}",
    ]
}

/// Generates names that are valid project (and Cargo package) names
pub fn arb_project_name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_-]{0,15}".prop_filter("reserved name", |name| {
        !crate::scaffold::is_reserved_name(name)
    })
}
