use std::io::{self, BufRead, Write};

use clap::Parser;
use swap_chess::config::SessionConfig;
use swap_chess::game_state::chess_types::ChessMove;
use swap_chess::session::{Session, SessionOutcome};
use swap_chess::utils::render_game_state::{render_view, GlyphSet};

/// Play swap chess in the terminal.
///
/// After most moves the moved piece trades places with a random piece of
/// its own color. A move that gives check is never swapped, and neither is
/// the reply to it.
#[derive(Parser, Debug)]
struct Args {
    /// Seed of the swap stream. Overrides `SWAP_CHESS_SEED`.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Moves to play before the prompt opens, e.g. `e2e4 e7e5`.
    #[arg(short, long, num_args(0..))]
    moves: Vec<ChessMove>,

    /// Do not report which squares were swapped.
    #[arg(long)]
    no_show_swaps: bool,

    /// Draw pieces with Unicode chess glyphs instead of letters.
    #[arg(long)]
    unicode: bool,
}

const HELP: &str = "Type moves like e2e4 (e7e8q to promote). Commands: u undo, moves, board, q quit.";

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swap_chess=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = SessionConfig::try_from_env().unwrap_or_else(|e| {
        tracing::warn!("{e}; falling back to defaults for unparsable settings");
        SessionConfig::from_env()
    });
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.no_show_swaps {
        config.show_swaps = false;
    }
    let glyphs = if args.unicode {
        GlyphSet::Unicode
    } else {
        GlyphSet::Letters
    };

    tracing::info!(
        "swap_chess v{} starting with seed {}",
        env!("CARGO_PKG_VERSION"),
        config.seed
    );

    let mut session = Session::new(config);
    for mv in args.moves {
        session
            .play(mv)
            .map_err(|e| format!("Move `{mv}` cannot be played: {e}"))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let draw = |out: &mut dyn Write, session: &Session| -> io::Result<()> {
        write!(out, "{}", render_view(&session.view(), glyphs))?;
        out.flush()
    };

    writeln!(out, "{HELP}").map_err(|e| e.to_string())?;
    draw(&mut out, &session).map_err(|e| e.to_string())?;

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| e.to_string())?;

        let result = match session.handle_line(&line) {
            Ok(SessionOutcome::Quit) => break,
            Ok(SessionOutcome::Applied(report)) if report.gives_check => {
                writeln!(out, "Check.").and_then(|_| draw(&mut out, &session))
            }
            Ok(SessionOutcome::Applied(_)) => draw(&mut out, &session),
            Ok(SessionOutcome::AwaitingPromotion(mv)) => writeln!(
                out,
                "Promotion for {mv}: q (queen), r (rook), b (bishop), n (knight), c to cancel"
            ),
            Ok(SessionOutcome::PromotionCancelled) => writeln!(out, "Promotion cancelled"),
            Ok(SessionOutcome::Undone) => {
                writeln!(out, "Undid last move").and_then(|_| draw(&mut out, &session))
            }
            Ok(SessionOutcome::LegalMoves(moves)) => {
                let listed: Vec<String> = moves.iter().map(ToString::to_string).collect();
                writeln!(out, "{} moves: {}", listed.len(), listed.join(" "))
            }
            Ok(SessionOutcome::Redraw) => draw(&mut out, &session),
            Err(e) => writeln!(out, "{e}"),
        };
        result.map_err(|e| e.to_string())?;
    }

    Ok(())
}
