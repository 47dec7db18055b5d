use crate::error::Result;
use crate::parsers::Parser;
use regex::bytes::Regex;

pub struct PomParser;

impl Parser for PomParser {
    fn manifest_name() -> &'static str {
        "pom.xml"
    }

    // The dependency is spliced in unescaped, so it may itself carry regex syntax.
    // Whitespace is the ASCII set only: no vertical tab, no Unicode spaces.
    fn dependency_version_regex(dependency: &str) -> Result<Regex> {
        Ok(Regex::new(&format!(
            r"(<artifactId>{dependency}</artifactId>[\t\n\f\r ]+<version>)[0-9\.-]+(</version>)"
        ))?)
    }

    fn version_line_format(version: &str) -> String {
        format!("${{1}}{version}${{2}}")
    }
}
