// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-file HTML report for `legend_scale_demo`.

use crate::svg::escape_xml;

/// One titled legend in the report.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: String,
    /// Inline SVG, or empty when the legend could not be computed.
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let title = escape_xml(title);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(
        "<style>\
         body { font-family: sans-serif; margin: 24px; }\
         section { display: inline-block; vertical-align: top; width: 300px; margin: 0 16px 24px 0; }\
         p { color: #444; font-size: 13px; }\
         </style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(section.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_xml(&section.description)));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped_but_svg_is_not() {
        let sections = [HtmlSection {
            title: "Pivot <0>",
            description: "Data -1 .. 1 with \"RdBu\" & friends".to_string(),
            svg: "<svg></svg>\n".to_string(),
        }];
        let html = render_report("Report & co", &sections);
        assert!(html.contains("<title>Report &amp; co</title>"));
        assert!(html.contains("<h2>Pivot &lt;0&gt;</h2>"));
        assert!(html.contains("<p>Data -1 .. 1 with &quot;RdBu&quot; &amp; friends</p>"));
        assert!(html.contains("<svg></svg>"));
    }
}
