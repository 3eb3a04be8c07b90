use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dino_runner::app::App;
use dino_runner::audio::TerminalBell;
use dino_runner::core::constants::TICK_MS;
use dino_runner::input::AppAction;
use dino_runner::ui::{render_game_scene, Hud};
use dino_runner::utils::{build_info, logging, persistence};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

struct Args {
    seed: Option<u64>,
    mute: bool,
    tuning: Option<PathBuf>,
}

fn print_usage() {
    println!("Dino Runner - jump and duck through an endless desert\n");
    println!("Usage: dino-runner [options]\n");
    println!("Options:");
    println!("  --seed N       Seed obstacle generation");
    println!("  --mute         Start with the bell muted");
    println!("  --tuning FILE  Gameplay tuning JSON (default: ~/.dino-runner/tuning.json)");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!("\nControls: Space/Up jump, Down duck, M mute, A demo, Esc quit");
    println!("Set RUST_LOG to write a log to ~/.dino-runner/dino-runner.log");
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        seed: None,
        mute: false,
        tuning: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(seed) => parsed.seed = Some(seed),
                    None => usage_error("--seed requires a number"),
                }
            }
            "--tuning" => {
                i += 1;
                match args.get(i) {
                    Some(path) => parsed.tuning = Some(PathBuf::from(path)),
                    None => usage_error("--tuning requires a file"),
                }
            }
            "--mute" => parsed.mute = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    parsed
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'dino-runner --help' for usage.");
    std::process::exit(1);
}

fn main() -> io::Result<()> {
    let args = parse_args();

    if logging::requested() {
        logging::init_file(&persistence::app_path(persistence::LOG_FILE)?)?;
    }

    // Bad config is reported before the terminal is taken over
    let tuning = persistence::load_tuning(args.tuning.as_deref())?;
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("{} seed {}", build_info::version_line(), seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let release_events = matches!(supports_keyboard_enhancement(), Ok(true));
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let app = App::new(tuning, seed, TerminalBell::stdout(args.mute), release_events);
    let result = run(&mut terminal, app);

    // Restore terminal, even if the loop failed
    if release_events {
        let _ = terminal.backend_mut().execute(PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("exiting on error: {}", e);
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<TerminalBell>,
) -> io::Result<()> {
    let started = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|f| {
            let hud = Hud {
                muted: app.audio.muted,
                demo: app.is_demo(),
            };
            render_game_scene(f, f.size(), &app.state, hud);
        })?;

        // Drain everything that arrived; inputs land before the next tick
        if event::poll(Duration::from_millis(TICK_MS))? {
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    let now_ms = started.elapsed().as_millis() as u64;
                    match app.on_key(key, now_ms) {
                        Some(AppAction::Quit) => {
                            log::info!("quit after {} runs", app.state.runs);
                            return Ok(());
                        }
                        Some(AppAction::ToggleMute) => {
                            let muted = app.audio.toggle_mute();
                            log::debug!("muted: {}", muted);
                        }
                        _ => {}
                    }
                }
            }
        }

        // Carry sub-millisecond remainders into the next frame
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(dt_ms);
        app.update(started.elapsed().as_millis() as u64, dt_ms);
    }
}
