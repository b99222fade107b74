//! HTML results table.
//!
//! One row per boat in rank order, one column per race. Alternate rows are
//! shaded and discarded scores are drawn on a grey background.

use html_escape::encode_text;
use std::io::{self, Write};

use crate::ranking::BoatResult;
use crate::regatta::SkipperNames;
use crate::score::format_points;

const CELL: &str = r#"<td style="padding:5px">"#;
const CENTERED: &str = r#"<td style="padding:5px;text-align:center">"#;

/// Write the standings as an HTML `<table>`.
///
/// Sail numbers without an entry in `names` get an empty Sailor cell.
pub fn render_html<W: Write>(
    results: &[BoatResult],
    names: &SkipperNames,
    club: &str,
    w: &mut W,
) -> io::Result<()> {
    let num_races = results.first().map_or(0, |r| r.scores.len());
    let club = encode_text(club);

    writeln!(w, r#"<table style="margin-left:auto;margin-right:auto">"#)?;
    writeln!(w, "  <tr>")?;
    for heading in ["Sail", "Sailor", "Club", "Rank", "Tot"] {
        writeln!(w, "    {CELL}<b>{heading}</b></td>")?;
    }
    for race in 1..=num_races {
        writeln!(w, "    {CENTERED}<b>R {race}</b></td>")?;
    }
    writeln!(w, "  </tr>")?;

    for (line, result) in results.iter().enumerate() {
        if line % 2 == 1 {
            writeln!(w, r#"  <tr style="background-color: #dddddd">"#)?;
        } else {
            writeln!(w, "  <tr>")?;
        }
        let name = names.get(&result.sail_number).map_or("", String::as_str);
        writeln!(w, "    {CELL}<b>{}</b></td>", result.sail_number)?;
        writeln!(w, "    {CELL}<b>{}</b></td>", encode_text(name))?;
        writeln!(w, "    {CELL}<b>{club}</b></td>")?;
        writeln!(w, "    {CENTERED}<b>{}</b></td>", result.rank)?;
        writeln!(w, "    {CENTERED}<b>{}</b></td>", format_points(result.total))?;
        for score in &result.scores {
            let style = if score.discarded {
                ";background-color:grey;color:white"
            } else {
                ""
            };
            writeln!(
                w,
                r#"    <td style="text-align:center{style}"><b>{}</b></td>"#,
                format_points(score.points)
            )?;
        }
        writeln!(w, "  </tr>")?;
    }

    writeln!(w, "</table>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Score;

    fn render(results: &[BoatResult], names: &SkipperNames, club: &str) -> String {
        let mut out = Vec::new();
        render_html(results, names, club, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> Vec<BoatResult> {
        vec![
            BoatResult {
                sail_number: 38,
                rank: 1,
                total: 4.5,
                scores: vec![
                    Score::new(1.0),
                    Score {
                        points: 3.0,
                        discarded: true,
                    },
                    Score::new(20.0 / 7.0),
                ],
            },
            BoatResult {
                sail_number: 99,
                rank: 2,
                total: 5.0,
                scores: vec![Score::new(2.0), Score::new(1.0), Score::new(2.0)],
            },
        ]
    }

    #[test]
    fn test_header_has_race_columns() {
        let html = render(&sample(), &SkipperNames::new(), "SARYC");
        assert!(html.starts_with("<table"));
        assert!(html.trim_end().ends_with("</table>"));
        assert!(html.contains("<b>R 1</b>"));
        assert!(html.contains("<b>R 3</b>"));
        assert!(!html.contains("<b>R 4</b>"));
        assert!(!html.contains("Design"));
    }

    #[test]
    fn test_rows_in_rank_order_with_shading() {
        let mut names = SkipperNames::new();
        names.insert(38, "Tim Arland".to_string());
        let html = render(&sample(), &names, "SARYC");

        let first = html.find("<b>38</b>").unwrap();
        let second = html.find("<b>99</b>").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("background-color: #dddddd").count(), 1);
        assert!(html.contains("<b>Tim Arland</b>"));
        assert_eq!(html.matches("<b>SARYC</b>").count(), 2);
    }

    #[test]
    fn test_scores_formatted_and_discards_marked() {
        let html = render(&sample(), &SkipperNames::new(), "");
        assert!(html.contains("<b>4.5</b>"));
        assert!(html.contains("<b>2.9</b>"));
        assert!(html.contains(
            r#"<td style="text-align:center;background-color:grey;color:white"><b>3</b></td>"#
        ));
        assert_eq!(html.matches("background-color:grey").count(), 1);
    }

    #[test]
    fn test_unknown_skipper_is_blank_and_names_escaped() {
        let mut names = SkipperNames::new();
        names.insert(99, "Lee & <Sons>".to_string());
        let html = render(&sample(), &names, "A&B");
        assert!(html.contains("<b>Lee &amp; &lt;Sons&gt;</b>"));
        assert!(html.contains("<b>A&amp;B</b>"));
        assert!(html.contains(&format!("{CELL}<b></b></td>")));
    }

    #[test]
    fn test_empty_results() {
        let html = render(&[], &SkipperNames::new(), "SARYC");
        assert!(html.contains("<b>Tot</b>"));
        assert!(!html.contains("R 1"));
    }
}
