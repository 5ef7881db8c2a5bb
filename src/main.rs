use clap::{crate_version, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

use morse_oracle_lib::adapters::{CpalAudioOutput, MockAudioOutput, ThreadPacer};
use morse_oracle_lib::codec::SymbolGroup;
use morse_oracle_lib::domain::{AudioSettings, Direction, OracleError, OracleResult, Theme, DEFAULT_PROFILE};
use morse_oracle_lib::player::{MorsePlayer, PlaybackControl, PlaybackOutcome};
use morse_oracle_lib::ports::AudioOutput;
use morse_oracle_lib::session::Session;
use morse_oracle_lib::storage::{ConfigStore, ProfileChanges};

#[derive(Parser)]
#[clap(
    author = "nerdenator industries",
    version = crate_version!(),
    about = "Translates text to and from Morse code."
)]
struct Cli {
    /// Directory holding configuration profiles.
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    /// Configuration profile to use.
    #[arg(long, global = true, default_value = DEFAULT_PROFILE)]
    profile: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encodes text to Morse. Reads stdin when no text is given.
    Encode {
        text: Vec<String>,
        /// Play the result as tones.
        #[arg(short, long)]
        play: bool,
        /// Save the translation to this file.
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
    /// Decodes Morse to text. Reads stdin when no Morse is given.
    Decode {
        morse: Vec<String>,
        /// Save the translation to this file.
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
    /// Plays Morse code as tones.
    Play { morse: Vec<String> },
    /// Shows a saved translation.
    Open {
        path: PathBuf,
        /// Play the saved Morse as tones.
        #[arg(short, long)]
        play: bool,
    },
    /// Lists the available audio output devices.
    Devices {},
    /// Prints the Morse symbol chart.
    Reference {},
    /// Manages configuration profiles.
    Config {
        #[clap(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Lists saved profiles.
    List {},
    /// Prints a profile as JSON.
    Show { name: Option<String> },
    /// Creates or updates a profile.
    Save {
        name: String,
        /// Theme name, e.g. "Papyrus Scroll".
        #[arg(long)]
        theme: Option<String>,
        /// Audio output device name.
        #[arg(long)]
        device: Option<String>,
        /// Tone sample rate in Hz.
        #[arg(long)]
        sample_rate: Option<u32>,
        /// Turn tone playback on or off.
        #[arg(long, value_enum)]
        audio: Option<Switch>,
    },
    /// Deletes a profile.
    Delete { name: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Switch {
    On,
    Off,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> OracleResult<()> {
    let store = match &cli.config_dir {
        Some(dir) => ConfigStore::new(dir),
        None => ConfigStore::platform_default()?,
    };

    match cli.command {
        Commands::Encode { text, play, save } => {
            let config = store.load_or_default(&cli.profile)?;
            let mut session = Session::new(config);
            session.set_input(&read_input(&text)?);
            println!("{}", session.translate()?);
            if let Some(path) = save {
                session.save_as(&path)?;
            }
            if play {
                play_morse(&session.config().audio, session.playable_morse()?)?;
            }
        }
        Commands::Decode { morse, save } => {
            let config = store.load_or_default(&cli.profile)?;
            let mut session = Session::new(config);
            session.set_mode(Direction::Decode);
            session.set_input(&read_input(&morse)?);
            println!("{}", session.translate()?);
            if let Some(path) = save {
                session.save_as(&path)?;
            }
        }
        Commands::Play { morse } => {
            let config = store.load_or_default(&cli.profile)?;
            if !config.audio.enabled {
                return Err(OracleError::Audio("Audio playback is disabled".into()));
            }
            play_morse(&config.audio, read_input(&morse)?.trim())?;
        }
        Commands::Open { path, play } => {
            let config = store.load_or_default(&cli.profile)?;
            let mut session = Session::new(config);
            session.open(&path)?;
            print_document(&session, &path);
            if play {
                play_morse(&session.config().audio, session.playable_morse()?)?;
            }
        }
        Commands::Devices {} => {
            let devices = if use_mock_audio() {
                MockAudioOutput::new().list_devices()?
            } else {
                CpalAudioOutput::new().list_devices()?
            };
            if devices.is_empty() {
                println!("No audio output devices found.");
            }
            for device in devices {
                let marker = if device.is_default { " (default)" } else { "" };
                println!("- {}{marker}", device.name);
            }
        }
        Commands::Reference {} => {
            for group in SymbolGroup::ALL {
                println!("{}:", group.title());
                for row in group.entries().chunks(6) {
                    let cells: Vec<String> =
                        row.iter().map(|(ch, pattern)| format!("{ch}: {pattern:<8}")).collect();
                    println!("  {}", cells.join(" ").trim_end());
                }
            }
        }
        Commands::Config { action } => run_config(&store, action)?,
    }

    Ok(())
}

fn run_config(store: &ConfigStore, action: ConfigAction) -> OracleResult<()> {
    match action {
        ConfigAction::List {} => {
            let names = store.list()?;
            if names.is_empty() {
                println!("No saved profiles in {}.", store.dir().display());
            }
            for name in names {
                println!("- {name}");
            }
        }
        ConfigAction::Show { name } => {
            let config = store.load_or_default(name.as_deref().unwrap_or(DEFAULT_PROFILE))?;
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| OracleError::Config(format!("Serialization error: {e}")))?;
            println!("{json}");
        }
        ConfigAction::Save {
            name,
            theme,
            device,
            sample_rate,
            audio,
        } => {
            let theme = theme
                .map(|theme| {
                    Theme::from_name(&theme)
                        .ok_or_else(|| OracleError::Config(format!("Unknown theme: {theme}")))
                })
                .transpose()?;
            let changes = ProfileChanges {
                theme,
                output_device: device,
                sample_rate,
                audio_enabled: audio.map(|switch| matches!(switch, Switch::On)),
            };
            let config = store.update(&name, changes)?;
            println!("Saved profile '{}'.", config.name);
        }
        ConfigAction::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted profile '{name}'.");
        }
    }
    Ok(())
}

/// Join command-line words, or read all of stdin when there are none
fn read_input(words: &[String]) -> OracleResult<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| OracleError::Session(format!("Failed to read input: {e}")))?;
    Ok(buf)
}

fn print_document(session: &Session, path: &Path) {
    println!("File:   {}", path.display());
    println!("Mode:   {}", session.mode());
    println!("Input:  {}", session.input());
    println!("Output: {}", session.output());
}

fn use_mock_audio() -> bool {
    std::env::var("MOCK_AUDIO").map(|v| v == "1").unwrap_or(false)
}

fn play_morse(settings: &AudioSettings, morse: &str) -> OracleResult<()> {
    let outcome = if use_mock_audio() {
        MorsePlayer::new(MockAudioOutput::new(), ThreadPacer, settings, PlaybackControl::new())
            .play(morse)?
    } else {
        MorsePlayer::new(CpalAudioOutput::new(), ThreadPacer, settings, PlaybackControl::new())
            .play(morse)?
    };
    if let PlaybackOutcome::Stopped { steps_played } = outcome {
        log::info!("Playback stopped after {steps_played} steps");
    }
    Ok(())
}
