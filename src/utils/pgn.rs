//! Move-record read/write for game history interchange.
//!
//! The text format borrows PGN's shape: `[Key "Value"]` header lines, a
//! blank line, then numbered long algebraic moves and a result token.
//! Reading replays every move through the engine, so an imported record is
//! legal by construction.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Local;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_game::ChessGame;
use crate::game_state::chess_rules::{promotion_set, LOS_ALAMOS_MODE_NAME, STANDARD_MODE_NAME};
use crate::game_state::chess_types::{PieceType, Team};
use crate::game_state::game_mode::{
    CustomLayout, GameMode, LosAlamosChess, StandardChess, VariantRules,
};
use crate::moves::move_descriptions::Move;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

pub const RECORD_DATE_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub headers: BTreeMap<String, String>,
    pub moves: Vec<Move>,
    pub game: ChessGame,
    pub result: String,
}

/// Export a game's history with the default header set.
pub fn write_move_record(game: &ChessGame) -> Result<String, ChessErrors> {
    let mode = game.mode();
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Plum Rules Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format(RECORD_DATE_FORMAT).to_string(),
    );
    headers.insert("Light".to_owned(), "Light".to_owned());
    headers.insert("Dark".to_owned(), "Dark".to_owned());
    headers.insert("Variant".to_owned(), mode.name().to_owned());
    headers.insert(
        "Result".to_owned(),
        game.get_game_status().result_token().to_owned(),
    );

    if !is_builtin_mode(mode.name()) {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("Layout".to_owned(), mode.initial_layout().to_owned());
        headers.insert("Width".to_owned(), mode.width().to_string());
        headers.insert("Height".to_owned(), mode.height().to_string());
        headers.insert("FirstTurn".to_owned(), mode.first_turn().to_string());
        insert_rule_headers(&mut headers, &mode.rules());
    }

    write_move_record_with_headers(&game.move_history(), &headers)
}

pub fn write_move_record_with_headers(
    moves: &[Move],
    headers: &BTreeMap<String, String>,
) -> Result<String, ChessErrors> {
    let mut out = String::new();
    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    // A record whose first move is Dark's starts at "1...".
    let offset = usize::from(moves.first().is_some_and(|mv| mv.team == Team::Dark));
    let mut parts = Vec::<String>::with_capacity(moves.len() + 1);
    for (i, mv) in moves.iter().enumerate() {
        let text = move_to_long_algebraic(mv)?;
        let ply = i + offset;
        let number = (ply / 2) + 1;
        if ply % 2 == 0 {
            parts.push(format!("{number}. {text}"));
        } else if i == 0 {
            parts.push(format!("{number}... {text}"));
        } else {
            parts.push(text);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    parts.push(result.to_owned());
    out.push_str(&parts.join(" "));
    out.push('\n');
    Ok(out)
}

/// Parse a record and replay it from the variant's starting position.
pub fn read_move_record(text: &str) -> Result<MoveRecord, ChessErrors> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut move_lines = Vec::<&str>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            move_lines.push(trimmed);
        }
    }

    let mut game = ChessGame::new(mode_from_headers(&headers)?)?;
    let mut result = "*".to_owned();

    let movetext = strip_comments(&move_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = cleaned.to_owned();
            break;
        }
        let mv = long_algebraic_to_move(cleaned, game.whos_turn(), game.width(), game.height())?;
        game.play_move(&mv)?;
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(MoveRecord {
        moves: game.move_history(),
        headers,
        game,
        result,
    })
}

fn is_builtin_mode(name: &str) -> bool {
    name == STANDARD_MODE_NAME || name == LOS_ALAMOS_MODE_NAME
}

fn insert_rule_headers(headers: &mut BTreeMap<String, String>, rules: &VariantRules) {
    let flag = |on: bool| (if on { "1" } else { "0" }).to_owned();
    headers.insert("DoubleStep".to_owned(), flag(rules.pawn_double_step));
    headers.insert("EnPassant".to_owned(), flag(rules.en_passant));
    headers.insert("Castling".to_owned(), flag(rules.castling));
    headers.insert(
        "Promotions".to_owned(),
        rules.promotion_choices.iter().map(|p| p.to_char()).collect(),
    );
}

/// Rule headers a set-up record carries; any that are missing fall back to
/// standard chess.
fn rules_from_headers(headers: &BTreeMap<String, String>) -> Result<VariantRules, ChessErrors> {
    let standard = VariantRules::standard();
    let flag = |key: &str, default: bool| match headers.get(key).map(String::as_str) {
        None => Ok(default),
        Some("1") => Ok(true),
        Some("0") => Ok(false),
        Some(other) => Err(ChessErrors::InvalidLayout(format!(
            "{key} must be 0 or 1, found {other}"
        ))),
    };

    let promotion_choices = match headers.get("Promotions") {
        None => standard.promotion_choices,
        Some(letters) => {
            let invalid =
                || ChessErrors::InvalidLayout(format!("invalid promotion pieces {letters}"));
            let choices = letters
                .chars()
                .map(|c| PieceType::from_char(c).ok_or_else(invalid))
                .collect::<Result<Vec<_>, _>>()?;
            promotion_set(&choices).ok_or_else(invalid)?
        }
    };

    Ok(VariantRules {
        pawn_double_step: flag("DoubleStep", standard.pawn_double_step)?,
        en_passant: flag("EnPassant", standard.en_passant)?,
        castling: flag("Castling", standard.castling)?,
        promotion_choices,
    })
}

/// Set-up records are replayed on the recorded size under the recorded
/// rules.
fn mode_from_headers(headers: &BTreeMap<String, String>) -> Result<Arc<dyn GameMode>, ChessErrors> {
    let variant = headers
        .get("Variant")
        .map(String::as_str)
        .unwrap_or(STANDARD_MODE_NAME);

    if headers.get("SetUp").map(String::as_str) != Some("1") {
        return match variant {
            STANDARD_MODE_NAME => Ok(Arc::new(StandardChess)),
            LOS_ALAMOS_MODE_NAME => Ok(Arc::new(LosAlamosChess)),
            other => Err(ChessErrors::InvalidLayout(format!(
                "unknown variant {other} without a set-up layout"
            ))),
        };
    }

    let layout = required_header(headers, "Layout")?;
    let width = parse_dimension(required_header(headers, "Width")?)?;
    let height = parse_dimension(required_header(headers, "Height")?)?;
    let first_turn = match headers.get("FirstTurn").map(String::as_str) {
        None | Some("light") => Team::Light,
        Some("dark") => Team::Dark,
        Some(other) => {
            return Err(ChessErrors::InvalidLayout(format!(
                "unknown first turn {other}"
            )))
        }
    };

    Ok(Arc::new(CustomLayout::new(
        variant,
        width,
        height,
        layout,
        rules_from_headers(headers)?,
        first_turn,
    )?))
}

fn required_header<'a>(
    headers: &'a BTreeMap<String, String>,
    key: &str,
) -> Result<&'a str, ChessErrors> {
    headers
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ChessErrors::InvalidLayout(format!("SetUp record is missing {key}")))
}

fn parse_dimension(value: &str) -> Result<i8, ChessErrors> {
    value
        .parse::<i8>()
        .map_err(|_| ChessErrors::InvalidLayout(format!("invalid board dimension {value}")))
}

fn parse_header_line(line: &str) -> Result<(String, String), ChessErrors> {
    let invalid = || ChessErrors::InvalidMoveText(line.to_owned());
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, value_raw) = inner.split_once(' ').ok_or_else(invalid)?;
    let value_raw = value_raw.trim();
    let value = value_raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;
    Ok((key.trim().to_owned(), value.replace("\\\"", "\"")))
}

fn strip_comments(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
