//! Season Standings
//!
//! Builds the per-day win-ratio rows served on `/predictions` and `/actual`
//! from a per-game results CSV (predicted or actual outcomes).
//!
//! The CSV must have a header with at least `Date`, `Home Team Name`,
//! `Away Team Name` and `Home Win`. Other columns are ignored.

use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::chart::{parse_row_date, ChartRow};
use crate::teams::{self, TEAM_NAMES};

const DATE_COLUMN: &str = "Date";
const HOME_COLUMN: &str = "Home Team Name";
const AWAY_COLUMN: &str = "Away Team Name";
const HOME_WIN_COLUMN: &str = "Home Win";

/// Errors that can occur while reading game results
#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    #[error("Line {line}: invalid date {value:?}")]
    InvalidDate { line: u64, value: String },

    #[error("Line {line}: unknown team {name:?}")]
    UnknownTeam { line: u64, name: String },

    #[error("Line {line}: invalid outcome {value:?}")]
    InvalidOutcome { line: u64, value: String },
}

/// One played (or predicted) game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub date: NaiveDate,
    /// Index into [`TEAM_NAMES`]
    pub home: usize,
    /// Index into [`TEAM_NAMES`]
    pub away: usize,
    pub home_win: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct Record {
    wins: u32,
    losses: u32,
}

impl Record {
    /// Win percentage rounded to two decimals, 0 before the first game
    fn win_pct(self) -> f64 {
        let games = self.wins + self.losses;
        if games == 0 {
            return 0.0;
        }
        let pct = self.wins as f64 * 100.0 / games as f64;
        (pct * 100.0).round() / 100.0
    }
}

/// Read game results from CSV data
pub fn read_games<R: Read>(reader: R) -> Result<Vec<GameResult>, StandingsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(StandingsError::MissingColumn(name))
    };

    let date_col = column(DATE_COLUMN)?;
    let home_col = column(HOME_COLUMN)?;
    let away_col = column(AWAY_COLUMN)?;
    let win_col = column(HOME_WIN_COLUMN)?;

    let mut games = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let date_str = field(date_col);
        let date = parse_row_date(date_str).ok_or_else(|| StandingsError::InvalidDate {
            line,
            value: date_str.to_string(),
        })?;

        let team = |col: usize| {
            let name = field(col);
            teams::team_index(name).ok_or_else(|| StandingsError::UnknownTeam {
                line,
                name: name.to_string(),
            })
        };
        let home = team(home_col)?;
        let away = team(away_col)?;

        let outcome = field(win_col);
        let home_win = parse_outcome(outcome).ok_or_else(|| StandingsError::InvalidOutcome {
            line,
            value: outcome.to_string(),
        })?;

        games.push(GameResult {
            date,
            home,
            away,
            home_win,
        });
    }

    Ok(games)
}

/// Read game results from a CSV file
pub fn load_games(path: &Path) -> Result<Vec<GameResult>, StandingsError> {
    let file = std::fs::File::open(path)?;
    read_games(std::io::BufReader::new(file))
}

/// Cumulative win percentages, one row per game day.
///
/// Games are applied in order. A row is emitted each time the date changes
/// and once more at the end, holding every team's percentage after the last
/// game of that day (0 for teams that have not played yet).
pub fn win_ratio_rows(games: &[GameResult]) -> Vec<ChartRow> {
    let mut records = [Record::default(); TEAM_NAMES.len()];
    let mut rows = Vec::new();
    let mut current: Option<NaiveDate> = None;

    let snapshot = |date: NaiveDate, records: &[Record]| {
        ChartRow::new(date, records.iter().map(|r| r.win_pct()).collect())
    };

    for game in games {
        if let Some(date) = current {
            if date != game.date {
                rows.push(snapshot(date, &records));
            }
        }
        current = Some(game.date);

        let (winner, loser) = if game.home_win {
            (game.home, game.away)
        } else {
            (game.away, game.home)
        };
        records[winner].wins += 1;
        records[loser].losses += 1;
    }

    if let Some(date) = current {
        rows.push(snapshot(date, &records));
    }

    rows
}

/// Load a results CSV and compute its win-ratio rows
pub fn load_series(path: &Path) -> Result<Vec<ChartRow>, StandingsError> {
    let games = load_games(path)?;
    let rows = win_ratio_rows(&games);

    tracing::info!(
        path = %path.display(),
        games = games.len(),
        days = rows.len(),
        "Loaded game results"
    );

    Ok(rows)
}

fn parse_outcome(value: &str) -> Option<bool> {
    match value {
        "1" | "1.0" | "true" | "True" | "TRUE" => Some(true),
        "0" | "0.0" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
,Season ID,Home Team Name,Away Team Name,Home Points,Away Points,Home Win,Date
0,22018,Boston Celtics,Philadelphia 76ers,105,87,1,2018-10-16
1,22018,Golden State Warriors,Oklahoma City Thunder,108,100,1,2018-10-16
2,22018,Charlotte Hornets,Milwaukee Bucks,112,113,0,2018-10-17
3,22018,Boston Celtics,Toronto Raptors,101,113,0,2018-10-19
";

    fn idx(name: &str) -> usize {
        teams::team_index(name).unwrap()
    }

    #[test]
    fn test_read_games() {
        let games = read_games(SAMPLE.as_bytes()).unwrap();

        assert_eq!(games.len(), 4);
        assert_eq!(games[0].home, idx("Boston Celtics"));
        assert_eq!(games[0].away, idx("Philadelphia 76ers"));
        assert!(games[0].home_win);
        assert!(!games[2].home_win);
        assert_eq!(games[3].date, NaiveDate::from_ymd_opt(2018, 10, 19).unwrap());
    }

    #[test]
    fn test_one_row_per_day_including_last() {
        let games = read_games(SAMPLE.as_bytes()).unwrap();
        let rows = win_ratio_rows(&games);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].values.len(), TEAM_NAMES.len());

        let day1 = &rows[0];
        assert_eq!(day1.values[idx("Boston Celtics")], 100.0);
        assert_eq!(day1.values[idx("Philadelphia 76ers")], 0.0);
        assert_eq!(day1.values[idx("Golden State Warriors")], 100.0);
        assert_eq!(day1.values[idx("Milwaukee Bucks")], 0.0);

        let day2 = &rows[1];
        assert_eq!(day2.values[idx("Milwaukee Bucks")], 100.0);
        assert_eq!(day2.values[idx("Boston Celtics")], 100.0);

        let day3 = &rows[2];
        assert_eq!(day3.values[idx("Boston Celtics")], 50.0);
        assert_eq!(day3.values[idx("Toronto Raptors")], 100.0);
    }

    #[test]
    fn test_win_pct_rounding() {
        let record = Record { wins: 2, losses: 1 };
        assert_eq!(record.win_pct(), 66.67);
        assert_eq!(Record::default().win_pct(), 0.0);
    }

    #[test]
    fn test_no_games_no_rows() {
        assert!(win_ratio_rows(&[]).is_empty());
    }

    #[test]
    fn test_aliases_and_float_outcomes() {
        let csv = "Date,Home Team Name,Away Team Name,Home Win\n\
                   2013-10-30T00:00:00,New Jersey Nets,Charlotte Bobcats,1.0\n";
        let games = read_games(csv.as_bytes()).unwrap();

        assert_eq!(games[0].home, idx("Brooklyn Nets"));
        assert_eq!(games[0].away, idx("Charlotte Hornets"));
        assert!(games[0].home_win);
    }

    #[test]
    fn test_reappearing_date_is_its_own_row() {
        let csv = "Date,Home Team Name,Away Team Name,Home Win\n\
                   2018-10-16,Utah Jazz,Boston Celtics,true\n\
                   2018-10-17,Utah Jazz,Boston Celtics,False\n\
                   2018-10-16,Boston Celtics,Utah Jazz,false\n\
                   2018-10-16,Miami Heat,Chicago Bulls,True\n";
        let games = read_games(csv.as_bytes()).unwrap();
        let rows = win_ratio_rows(&games);

        let dates: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, ["2018-10-16", "2018-10-17", "2018-10-16"]);

        let jazz: Vec<f64> = rows.iter().map(|r| r.values[idx("Utah Jazz")]).collect();
        assert_eq!(jazz, [100.0, 50.0, 66.67]);
        assert_eq!(rows[2].values[idx("Miami Heat")], 100.0);
    }

    #[test]
    fn test_word_outcomes() {
        for (value, home_win) in [
            ("true", true),
            ("True", true),
            ("TRUE", true),
            ("false", false),
            ("False", false),
            ("FALSE", false),
            ("0.0", false),
        ] {
            let csv = format!(
                "Date,Home Team Name,Away Team Name,Home Win\n2018-10-16,Utah Jazz,Boston Celtics,{}\n",
                value
            );
            let games = read_games(csv.as_bytes()).unwrap();
            assert_eq!(games[0].home_win, home_win, "outcome {:?}", value);
        }

        assert_eq!(parse_outcome("yes"), None);
        assert_eq!(parse_outcome(""), None);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let missing = "Date,Home Team Name,Home Win\n2018-10-16,Utah Jazz,1\n";
        assert!(matches!(
            read_games(missing.as_bytes()),
            Err(StandingsError::MissingColumn("Away Team Name"))
        ));

        let bad_team = "Date,Home Team Name,Away Team Name,Home Win\n\
                        2018-10-16,Utah Jazz,Boston Celtics,1\n\
                        2018-10-17,Seattle SuperSonics,Boston Celtics,1\n";
        match read_games(bad_team.as_bytes()) {
            Err(StandingsError::UnknownTeam { line, name }) => {
                assert_eq!(line, 3);
                assert_eq!(name, "Seattle SuperSonics");
            }
            other => panic!("expected UnknownTeam, got {:?}", other),
        }

        let bad_outcome = "Date,Home Team Name,Away Team Name,Home Win\n\
                           2018-10-16,Utah Jazz,Boston Celtics,maybe\n";
        assert!(matches!(
            read_games(bad_outcome.as_bytes()),
            Err(StandingsError::InvalidOutcome { line: 2, .. })
        ));

        let bad_date = "Date,Home Team Name,Away Team Name,Home Win\n\
                        Oct 16 2018,Utah Jazz,Boston Celtics,1\n";
        assert!(matches!(
            read_games(bad_date.as_bytes()),
            Err(StandingsError::InvalidDate { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_series_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let rows = load_series(file.path()).unwrap();
        assert_eq!(rows.len(), 3);

        assert!(matches!(
            load_series(Path::new("/nonexistent/predicted.csv")),
            Err(StandingsError::Io(_))
        ));
    }
}
