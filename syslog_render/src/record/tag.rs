//! Parser for field tag strings such as `pos=0,name=url,omitempty`.

#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct TagSettings<'t> {
    pub pos: Option<&'t str>,
    pub name: Option<&'t str>,
    pub omit_empty: bool,
}

/// Splits `tag` into its settings. Later entries win over earlier ones.
pub(super) fn parse(tag: &str) -> TagSettings<'_> {
    let mut out = TagSettings::default();
    for part in tag.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        match part.split_once('=') {
            Some((key, value)) => match key.trim() {
                "pos" => out.pos = Some(value.trim()),
                "name" => out.name = Some(value.trim()),
                _ => {}
            },
            None if part == "omitempty" => out.omit_empty = true,
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{TagSettings, parse};
    use rstest::rstest;

    #[rstest]
    #[case("", TagSettings::default())]
    #[case("pos=0", TagSettings { pos: Some("0"), ..TagSettings::default() })]
    #[case(
        "name=log-fifo-size, omitempty",
        TagSettings { name: Some("log-fifo-size"), omit_empty: true, ..TagSettings::default() }
    )]
    #[case("name=", TagSettings { name: Some(""), ..TagSettings::default() })]
    #[case("pos=1,pos=2", TagSettings { pos: Some("2"), ..TagSettings::default() })]
    #[case("inline,other=x", TagSettings::default())]
    fn parses_settings(#[case] tag: &str, #[case] expected: TagSettings<'static>) {
        assert_eq!(parse(tag), expected);
    }
}
