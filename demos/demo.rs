//! Scripted walk through a drill session.
//!
//! Run with: `cargo run --example demo`
//! (set `RUST_LOG=drill_trainer=debug` to see the engine's own events)
//!
//! The demo feeds key presses into a [`Drill`] the way a UI layer would:
//!
//! 1. **Multiple choice** — a digit picks an option, `Enter` checks it, and
//!    the confetti is ticked frame by frame onto a small ASCII canvas.
//! 2. **Free text** — typed text is set directly (the host owns editing),
//!    `Enter` checks it and a wrong answer raises the error pulse.
//! 3. **Advance** — `Enter` after a check moves on; the pending focus target
//!    tells the host where to put the cursor.

use drill_trainer::{
    load_exercises, Bounds, Drill, DrillConfig, DrillView, InteractionMode, Key, Session,
    SpriteBuffer,
};
use tracing_subscriber::EnvFilter;

const EXERCISES: &str = r#"[
    { "id": "v1", "type": "vocab", "prompt": "Polish for 'house'?", "answer": "dom",
      "choices": ["dom", "kot", "pies"], "explanation": "dom: house, home" },
    { "id": "v2", "type": "vocab", "prompt": "Polish for 'cat'?", "answer": "kot" },
    { "id": "v3", "type": "vocab", "prompt": "Polish for 'dog'?", "answer": "pies",
      "choices": ["ryba", "pies", "koń", "ptak"] },
    { "id": "g1", "type": "grammar", "prompt": "Diminutive of 'dom'?", "answer": "domek",
      "explanation": "-ek forms masculine diminutives" }
]"#;

const COLS: usize = 48;
const ROWS: usize = 12;

fn print_view(view: &DrillView) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}] {}  ({})", view.kind, view.exercise_id, view.mode);
    println!("  Q: {}", view.prompt);
    match view.mode {
        InteractionMode::MultipleChoice => {
            for c in &view.choices {
                let marker = if c.selected { ">" } else { " " };
                let key = c.shortcut.map(|n| n.to_string()).unwrap_or_default();
                println!("   {marker} {key}. {}", c.text);
            }
        }
        InteractionMode::FreeText => println!("  > {}_", view.value),
    }
    if view.has_checked {
        let verdict = if view.is_correct == Some(true) { "correct" } else { "wrong" };
        println!("  => {verdict} (answer: {})", view.answer.as_deref().unwrap_or(""));
        if let Some(explanation) = &view.explanation {
            println!("     {explanation}");
        }
    }
    if let Some(pulse) = view.pulse {
        println!("  pulse: {pulse:?}");
    }
}

/// Rasterize the current confetti frame onto a character grid.
fn print_canvas(canvas: &SpriteBuffer, bounds: Bounds) {
    let mut grid = vec![[' '; COLS]; ROWS];
    for s in canvas.sprites() {
        if s.x < 0.0 || s.y < 0.0 {
            continue;
        }
        let col = (s.x / bounds.width * COLS as f32) as usize;
        let row = (s.y / bounds.height * ROWS as f32) as usize;
        if col < COLS && row < ROWS {
            grid[row][col] = if s.alpha > 0.5 { '*' } else { '.' };
        }
    }
    println!("  +{}+", "-".repeat(COLS));
    for row in grid {
        println!("  |{}|", row.iter().collect::<String>());
    }
    println!("  +{}+", "-".repeat(COLS));
}

fn press(drill: &mut Drill<Session>, key: &str) {
    let outcome = drill.handle_key(Key::parse(key));
    println!("  key {key:<9} -> {outcome:?}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("drill_trainer=info")),
        )
        .init();

    let exercises = match load_exercises(EXERCISES) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("bad exercise data: {err}");
            std::process::exit(1);
        }
    };

    let bounds = Bounds { width: 480.0, height: 240.0 };
    let session = match Session::with_seed(exercises, Some(2024)) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("cannot start session: {err}");
            std::process::exit(1);
        }
    };
    let config = DrillConfig { rng_seed: Some(7), bounds, ..DrillConfig::default() };
    let mut drill = Drill::new(session, SpriteBuffer::new(), config);

    for round in 1..=4 {
        println!();
        println!("══ Round {round} ══");
        if let Some(focus) = drill.take_pending_focus() {
            println!("  focus -> {focus:?}");
        }
        print_view(&drill.view());

        // Answer right on odd rounds, wrong on even ones.
        let answer = drill.exercise().answer.clone();
        match drill.mode() {
            InteractionMode::MultipleChoice => {
                let choices = &drill.exercise().choices;
                let target = if round % 2 == 1 {
                    choices.iter().position(|c| *c == answer).unwrap_or(0)
                } else {
                    choices.iter().position(|c| *c != answer).unwrap_or(0)
                };
                press(&mut drill, &(target + 1).to_string());
            }
            InteractionMode::FreeText => {
                let typed = if round % 2 == 1 { answer.to_uppercase() } else { "nie wiem".to_string() };
                println!("  typed    {typed:?}");
                drill.set_answer_value(typed);
            }
        }
        press(&mut drill, "Enter");
        print_view(&drill.view());

        if drill.confetti().is_running() {
            for frame in 1.. {
                let running = drill.tick();
                if frame % 35 == 0 || !running {
                    println!("  frame {}", drill.confetti().frame());
                    print_canvas(drill.canvas(), bounds);
                }
                if !running {
                    break;
                }
            }
        }

        press(&mut drill, "Enter");
    }
}
