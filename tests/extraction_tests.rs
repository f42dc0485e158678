//! Extraction pipeline tests
//!
//! These tests run the full extract-and-normalize pipeline over a fixture
//! page shaped like the published standings page: nested layout tables,
//! presentational markup inside cells, spacer rows, and long-form header
//! labels.

use pretty_assertions::assert_eq;
use standings_web::{Normalizer, ScrapeConfig, StripeClass, TableExtractor};

const LEAGUE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>League Tables</title></head>
<body>
  <table width="100%">
    <tr><td>
      <table class="leagueTable" cellspacing="0">
        <tr>
          <th>Position</th><th>Team Name</th><th>Games Played</th>
          <th>Games Won</th><th>Games Drawn</th><th>Games Lost</th>
          <th>Goals For</th><th>Goals Against</th><th>Goal Difference</th>
          <th>Points</th>
        </tr>
        <tr></tr>
        <tr><td>1</td><td><b>Oakwood<br>(U13)</b></td><td>10</td><td>10</td><td>0</td><td>0</td><td>40</td><td>10</td><td>30</td><td>30</td></tr>
        <tr><td>2</td><td>Riverside U13s</td><td>10</td><td>8</td><td>1</td><td>1</td><td>35</td><td>12</td><td>23</td><td>25</td></tr>
        <tr><td>3</td><td>Parkside Under 13</td><td>10</td><td>7</td><td>1</td><td>2</td><td>28</td><td>15</td><td>13</td><td>22</td></tr>
        <tr><td>4</td><td>Town &amp; District</td><td>10</td><td>5</td><td>2</td><td>3</td><td>22</td><td>18</td><td>4</td><td>17</td></tr>
        <tr><td>5</td><td>Hill - U12A</td><td>10</td><td>4</td><td>2</td><td>4</td><td>19</td><td>21</td><td>-2</td><td>14</td></tr>
        <tr><td>6</td><td>Meadow Colts</td><td>10</td><td>2</td><td>2</td><td>6</td><td>14</td><td>28</td><td>-14</td><td>8</td></tr>
        <tr><td>7</td><td>Bridge Rovers (U13)</td><td>10</td><td>1</td><td>0</td><td>9</td><td>9</td><td>44</td><td>-35</td><td>3</td></tr>
      </table>
    </td></tr>
  </table>
</body>
</html>"#;

#[test]
fn test_full_extraction() {
    let extractor = TableExtractor::new(ScrapeConfig::default());
    let table = extractor.extract(LEAGUE_PAGE).unwrap();

    assert_eq!(
        table.header().unwrap(),
        &["Pos", "Team", "Pl", "W", "D", "L", "GF", "GA", "GD", "Pts"]
    );
    assert_eq!(table.data_rows().len(), 7);
    // <br> inside the bolded cell keeps its word boundary
    assert_eq!(table.data_rows()[0][1], "Oakwood (U13)");
    // entity decoding
    assert_eq!(table.data_rows()[3][1], "Town & District");
}

#[test]
fn test_full_normalization() {
    let extractor = TableExtractor::new(ScrapeConfig::default());
    let table = extractor.extract(LEAGUE_PAGE).unwrap();
    let display = Normalizer::new().normalize(&table);

    assert_eq!(
        display.headers,
        vec!["#", "Team", "Pl", "W", "D", "L", "+/-", "GD", "Pts"]
    );

    let teams: Vec<&str> = display
        .rows
        .iter()
        .map(|row| row.cells[1].as_str())
        .collect();
    assert_eq!(
        teams,
        vec![
            "Oakwood",
            "Riverside",
            "Parkside",
            "Town & District",
            "Hill",
            "Meadow Colts",
            "Bridge Rovers",
        ]
    );

    // GF/GA merged into a single cell
    assert_eq!(display.rows[0].cells[6], "40-10");
    assert_eq!(display.rows[6].cells[6], "9-44");
    // GA column is gone from every row
    assert!(display.rows.iter().all(|row| row.cells.len() == 9));
}

#[test]
fn test_stripe_zones_over_seven_teams() {
    let extractor = TableExtractor::new(ScrapeConfig::default());
    let table = extractor.extract(LEAGUE_PAGE).unwrap();
    let display = Normalizer::new().normalize(&table);

    let stripes: Vec<Option<StripeClass>> =
        display.rows.iter().map(|row| row.stripe).collect();
    assert_eq!(
        stripes,
        vec![
            Some(StripeClass::Leader),
            Some(StripeClass::Promotion),
            Some(StripeClass::Promotion),
            None,
            None,
            Some(StripeClass::Relegation),
            Some(StripeClass::Relegation),
        ]
    );
}

#[test]
fn test_page_without_league_table_degrades_to_fallback() {
    let html = r#"
        <html><body>
          <table>
            <tr><th>Position</th><th>Team Name</th><th>Points</th></tr>
            <tr><td>1</td><td>Oakwood</td><td>30</td></tr>
          </table>
        </body></html>
    "#;
    let extractor = TableExtractor::new(ScrapeConfig::default());
    let table = extractor.extract(html).unwrap();
    assert_eq!(table.header().unwrap(), &["Pos", "Team", "Pts"]);
    assert_eq!(table.data_rows().len(), 1);
}

#[test]
fn test_empty_document_yields_empty_table() {
    let extractor = TableExtractor::new(ScrapeConfig::default());
    let table = extractor.extract("").unwrap();
    assert!(table.is_empty());

    let display = Normalizer::new().normalize(&table);
    assert!(display.headers.is_empty());
    assert!(display.rows.is_empty());
}
