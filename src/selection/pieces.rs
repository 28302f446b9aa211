//! Movable piece enumeration
//!
//! Parses a FEN into a [`shakmaty::Chess`] position, walks its legal moves and
//! collects the piece type standing on each origin square. Move generation is
//! entirely shakmaty's; this module only decides what goes on the wheel.

use crate::core::{SelectionError, SelectionResult};
use crate::resolver::PositionString;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Position, Role};

/// Display strings for the six piece roles and the two sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    pub pawn: String,
    pub knight: String,
    pub bishop: String,
    pub rook: String,
    pub queen: String,
    pub king: String,
    pub white: String,
    pub black: String,
    /// Word for "piece" used in the result line
    pub piece: String,
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::turkish()
    }
}

impl LabelTable {
    /// Turkish labels, the wording the wheel was first made with
    pub fn turkish() -> Self {
        Self {
            pawn: "Piyon".to_string(),
            knight: "At".to_string(),
            bishop: "Fil".to_string(),
            rook: "Kale".to_string(),
            queen: "Vezir".to_string(),
            king: "Şah".to_string(),
            white: "Beyaz".to_string(),
            black: "Siyah".to_string(),
            piece: "Taş".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            pawn: "Pawn".to_string(),
            knight: "Knight".to_string(),
            bishop: "Bishop".to_string(),
            rook: "Rook".to_string(),
            queen: "Queen".to_string(),
            king: "King".to_string(),
            white: "White".to_string(),
            black: "Black".to_string(),
            piece: "Piece".to_string(),
        }
    }

    pub fn role(&self, role: Role) -> &str {
        match role {
            Role::Pawn => &self.pawn,
            Role::Knight => &self.knight,
            Role::Bishop => &self.bishop,
            Role::Rook => &self.rook,
            Role::Queen => &self.queen,
            Role::King => &self.king,
        }
    }

    pub fn side(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

/// Piece types the side to move can legally move, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovablePieces {
    pub side: Color,
    pub labels: Vec<String>,
}

impl MovablePieces {
    /// True when the side to move has no legal move (checkmate or stalemate)
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Parse a FEN into a standard chess position
pub fn parse_position(position: &PositionString) -> SelectionResult<Chess> {
    let invalid = |reason: String| SelectionError::InvalidPosition {
        fen: position.as_str().to_string(),
        reason,
    };

    let fen: Fen = position
        .as_str()
        .parse()
        .map_err(|e: shakmaty::fen::ParseFenError| invalid(e.to_string()))?;

    fen.into_position(CastlingMode::Standard)
        .map_err(|e| invalid(e.to_string()))
}

/// Collect the distinct labels of the pieces that have at least one legal move
///
/// An empty result is not an error: it means no piece can move.
pub fn enumerate_movable_pieces(
    position: &PositionString,
    labels: &LabelTable,
) -> SelectionResult<MovablePieces> {
    let pos = parse_position(position)?;
    let side = pos.turn();
    let board = pos.board();

    let mut movable: Vec<String> = Vec::new();
    for mv in pos.legal_moves() {
        let Some(from) = mv.from() else {
            continue;
        };
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.color != side {
            continue;
        }
        let label = labels.role(piece.role);
        if !movable.iter().any(|existing| existing == label) {
            movable.push(label.to_string());
        }
    }

    Ok(MovablePieces {
        side,
        labels: movable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const KINGS_ONLY_FEN: &str = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
    const FOOLS_MATE_FEN: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    const STALEMATE_FEN: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

    fn position(fen: &str) -> PositionString {
        PositionString::new(fen)
    }

    #[test]
    fn test_kings_only_gives_king_label() {
        //! With only kings on the board, the king is the only movable piece
        let movable = enumerate_movable_pieces(&position(KINGS_ONLY_FEN), &LabelTable::turkish())
            .expect("valid position");
        assert_eq!(movable.side, Color::White);
        assert_eq!(movable.labels, vec!["Şah".to_string()]);
    }

    #[test]
    fn test_start_position_pawns_and_knights() {
        //! Only pawns and knights can move from the initial position
        let movable = enumerate_movable_pieces(&position(START_FEN), &LabelTable::english())
            .expect("valid position");
        let mut labels = movable.labels.clone();
        labels.sort();
        assert_eq!(labels, vec!["Knight".to_string(), "Pawn".to_string()]);
    }

    #[test]
    fn test_enumeration_is_deterministic_and_unique() {
        //! Same input, same ordered output, no duplicates
        let table = LabelTable::turkish();
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let first = enumerate_movable_pieces(&position(fen), &table).expect("valid");
        let second = enumerate_movable_pieces(&position(fen), &table).expect("valid");
        assert_eq!(first, second);

        let mut deduped = first.labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), first.labels.len());
    }

    #[test]
    fn test_checkmate_gives_empty_set() {
        //! Checkmate is "no movable piece", not an error
        let movable = enumerate_movable_pieces(&position(FOOLS_MATE_FEN), &LabelTable::default())
            .expect("checkmate is a valid position");
        assert!(movable.is_empty());
        assert_eq!(movable.side, Color::White);
    }

    #[test]
    fn test_stalemate_gives_empty_set() {
        let movable = enumerate_movable_pieces(&position(STALEMATE_FEN), &LabelTable::default())
            .expect("stalemate is a valid position");
        assert!(movable.is_empty());
        assert_eq!(movable.side, Color::Black);
    }

    #[test]
    fn test_black_to_move_only_lists_black_pieces() {
        //! After 1.e4 black can move pawns and knights, labelled for black
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        let movable = enumerate_movable_pieces(&position(fen), &LabelTable::english())
            .expect("valid position");
        assert_eq!(movable.side, Color::Black);
        assert_eq!(movable.labels.len(), 2);
    }

    #[test]
    fn test_garbage_is_invalid_position() {
        let err = enumerate_movable_pieces(&position("not a fen"), &LabelTable::default())
            .expect_err("garbage must not parse");
        assert!(matches!(err, SelectionError::InvalidPosition { .. }));
    }

    #[test]
    fn test_missing_king_is_invalid_position() {
        //! Parses as FEN but is not a legal setup
        let err = enumerate_movable_pieces(&position("8/8/8/8/8/8/8/4K3 w - - 0 1"), &LabelTable::default())
            .expect_err("no black king");
        assert!(matches!(err, SelectionError::InvalidPosition { .. }));
    }

    #[test]
    fn test_label_table_sides() {
        let table = LabelTable::turkish();
        assert_eq!(table.side(Color::White), "Beyaz");
        assert_eq!(table.side(Color::Black), "Siyah");
        assert_eq!(table.role(Role::Knight), "At");
    }
}
