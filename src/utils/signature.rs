pub fn get_signature(version: &str) -> String {
    format!(
        r#"
    .------.
   /  ()    \________      nexttag (next release tag for your pipeline)
   \        /--------'
    '------'               Reads the latest release tag, prints the next one.
                           v{}
"#,
        version
    )
}
