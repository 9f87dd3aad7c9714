use anyhow::{Context, Result};
use chess_core::{format_bitboard, read_fen_file, Fen, Piece, DEFAULT_FEN_PATH};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 之外默认打开本程序和核心库的 info 日志
fn log_filter() -> Result<EnvFilter> {
    let filter = EnvFilter::from_default_env()
        .add_directive("fen_inspect=info".parse()?)
        .add_directive("chess_core=info".parse()?);
    Ok(filter)
}

fn main() -> Result<()> {
    // 初始化日志
    let filter = log_filter()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FEN_PATH.to_string());

    let raw = read_fen_file(&path).with_context(|| format!("读取 FEN 文件失败: {}", path))?;
    let record = Fen::parse(&raw).with_context(|| format!("解析 FEN 失败: {}", raw))?;

    info!(
        "走子方: {:?}, 易位权: {}, 吃过路兵: {}, 半回合: {}, 回合: {}",
        record.side_to_move,
        record.castling,
        record
            .en_passant
            .map(|sq| sq.to_string())
            .unwrap_or_else(|| "-".to_string()),
        record.halfmove_clock,
        record.fullmove_number
    );

    println!("{}", record.board);

    for piece in Piece::all() {
        let bitboard = record.board.bitboard(piece);
        if bitboard == 0 {
            continue;
        }
        println!("{} ({:?} {:?}):", piece.to_fen_char(), piece.side, piece.piece_type);
        println!("{}", format_bitboard(bitboard));
    }

    println!("{}", Fen::to_string(&record));

    Ok(())
}
