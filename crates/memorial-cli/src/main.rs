//! Eldritch Eclipse CLI
//!
//! Thin wrapper around memorial-core for headless use.
//!
//! ## Usage
//!
//! ```bash
//! # Show how a design renders
//! memorial render --shape oval --color rose-red --name "Jane Doe"
//!
//! # Same, as JSON
//! memorial render --shape heart --json
//!
//! # Export a design as PNG into a directory
//! memorial export --shape cross --moss --out ./exports
//!
//! # Compose the share message for a design
//! memorial share --name "Jane Doe" --epitaph "Gone too soon"
//!
//! # Filename slug of a name
//! memorial slug "Jane O'Brien"
//!
//! # Validate a registration
//! memorial register --name Lenore --email lenore@raven.org
//!
//! # Landing page theme preference
//! memorial theme show
//! memorial theme toggle
//! memorial theme set light
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use memorial_core::designer::{designer_document, ids};
use memorial_core::registration::{SubmitOutcome, EMAIL_ERROR, NAME_ERROR, SUCCESS_MESSAGE};
use memorial_core::{
    logging, referral, share_design, slug, DirectorySink, Document, ExportJob, Keyed,
    PreferenceStore, RegistrationForm, ShareChannel, ShareError, ShareMessage, ShareOutcome,
    SilhouetteRasterizer, StoneConfig, ThemePreference,
};

/// Eldritch Eclipse - Memorial Designer
#[derive(Parser)]
#[command(name = "memorial")]
#[command(version = "0.1.0")]
#[command(about = "Eldritch Eclipse - gravestone designer from the command line")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: platform data dir /eclipse-memorial)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a design and print the resulting card
    Render {
        #[command(flatten)]
        design: DesignArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render a design and save it as PNG
    Export {
        #[command(flatten)]
        design: DesignArgs,

        /// Output directory (default: downloads directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the share message for a design
    Share {
        #[command(flatten)]
        design: DesignArgs,

        /// Base URL of the designer page
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        base_url: String,
    },

    /// Print the filename slug of some text
    Slug {
        text: String,
    },

    /// Validate a landing page registration
    Register {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,
    },

    /// Landing page theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the stored theme
    Show,
    /// Flip between light and dark
    Toggle,
    /// Store a theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
        }
    }
}

/// Designer control values. Omitted options keep the designer defaults.
#[derive(Args)]
struct DesignArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    dates: Option<String>,
    #[arg(long)]
    epitaph: Option<String>,
    /// rectangle, arched, oval, cross, heart
    #[arg(long)]
    shape: Option<String>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    font: Option<String>,
    #[arg(long)]
    engraving: Option<String>,
    #[arg(long)]
    icon: Option<String>,
    /// gothic-night or daylight
    #[arg(long)]
    scene: Option<String>,
    #[arg(long)]
    blood_drip: bool,
    #[arg(long)]
    moss: bool,
    #[arg(long)]
    cracks: bool,
}

impl DesignArgs {
    /// A designer document with these values applied and rendered.
    fn render(&self) -> Document {
        let mut doc = designer_document();
        let values = [
            (ids::INPUT_NAME, &self.name),
            (ids::INPUT_DATES, &self.dates),
            (ids::INPUT_EPITAPH, &self.epitaph),
            (ids::SELECT_SHAPE, &self.shape),
            (ids::SELECT_COLOR, &self.color),
            (ids::SELECT_FONT, &self.font),
            (ids::SELECT_ENGRAVING, &self.engraving),
            (ids::SELECT_ICON, &self.icon),
            (ids::SELECT_SCENE, &self.scene),
        ];
        for (id, value) in values {
            if let Some(value) = value {
                doc.set_value(id, value.as_str());
            }
        }
        doc.set_checked(ids::TOGGLE_BLOOD_DRIP, self.blood_drip);
        doc.set_checked(ids::TOGGLE_MOSS, self.moss);
        doc.set_checked(ids::TOGGLE_CRACKS, self.cracks);

        memorial_core::update_stone(&mut doc);
        doc
    }
}

/// Writes the share message to stdout.
struct StdoutChannel;

impl ShareChannel for StdoutChannel {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn deliver(&self, message: &ShareMessage) -> Result<(), ShareError> {
        println!("{}", message.title);
        println!("{}", message.full_text());
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    match cli.command {
        Commands::Render { design, json } => {
            let doc = design.render();
            if json {
                println!("{}", serde_json::to_string_pretty(&render_json(&doc))?);
            } else {
                print_render(&doc);
            }
        }

        Commands::Export { design, out } => {
            let doc = design.render();
            let out = out.unwrap_or_else(|| dirs::download_dir().unwrap_or_else(|| data_dir.clone()));
            let timestamp = chrono::Utc::now().timestamp_millis();

            let job = ExportJob::prepare(&doc, timestamp)?;
            let path = job
                .run(&SilhouetteRasterizer, &DirectorySink::new(&out))
                .with_context(|| format!("Failed to export into {}", out.display()))?;
            println!("Exported: {}", path.display());
        }

        Commands::Share { design, base_url } => {
            let doc = design.render();
            let url = format!("{}/designer", base_url.trim_end_matches('/'));
            let message = ShareMessage::compose(
                doc.value_of(ids::INPUT_NAME),
                doc.value_of(ids::INPUT_EPITAPH),
                &url,
            );
            if share_design(&message, &[&StdoutChannel]) == ShareOutcome::Undelivered {
                bail!("Share message could not be delivered");
            }
        }

        Commands::Slug { text } => {
            println!("{}", slug(&text));
        }

        Commands::Register { name, email } => {
            let mut form = RegistrationForm::new();
            form.name = name;
            form.email = email;

            match form.submit() {
                SubmitOutcome::Rejected(errors) => {
                    if errors.name {
                        eprintln!("name: {}", NAME_ERROR);
                    }
                    if errors.email {
                        eprintln!("email: {}", EMAIL_ERROR);
                    }
                    bail!("Registration rejected");
                }
                SubmitOutcome::Submitting(registration) => {
                    form.complete();
                    println!("{}", form.submit_label());
                    println!("Registered: {} <{}>", registration.name, registration.email);
                    println!("{}", SUCCESS_MESSAGE);
                    println!("Designer: {}", referral::designer_link());
                }
            }
        }

        Commands::Theme { action } => {
            let store = PreferenceStore::open(data_dir.join("preferences.redb"))
                .with_context(|| format!("Failed to open preferences in {}", data_dir.display()))?;

            let theme = match action {
                ThemeAction::Show => ThemePreference::load(&store),
                ThemeAction::Toggle => {
                    let theme = ThemePreference::load(&store).toggled();
                    theme.save(&store)?;
                    theme
                }
                ThemeAction::Set { theme } => {
                    let theme = ThemePreference::from(theme);
                    theme.save(&store)?;
                    theme
                }
            };
            println!("Theme: {}", theme.as_str());
        }
    }

    Ok(())
}

fn print_render(doc: &Document) {
    let config = StoneConfig::capture(doc);
    println!("Scene:    {}", config.scene_theme.key());
    println!("Card:     {}", doc.class_attr(ids::CARD));
    println!("Style:    {}", doc.style_attr(ids::CARD));
    println!("Icon:     {}", doc.text_of(ids::ICON));
    println!("Name:     {}", doc.text_of(ids::NAME));
    println!("Dates:    {}", doc.text_of(ids::DATES));
    println!("Epitaph:  {}", doc.text_of(ids::EPITAPH));
    println!("Drip:     {}", doc.class_attr(ids::BLOOD_DRIP));
}

fn render_json(doc: &Document) -> serde_json::Value {
    let node = |id: &str| {
        serde_json::json!({
            "class": doc.class_attr(id),
            "style": doc.style_attr(id),
            "text": doc.text_of(id),
        })
    };
    serde_json::json!({
        "config": StoneConfig::capture(doc),
        "card": node(ids::CARD),
        "icon": node(ids::ICON),
        "name": node(ids::NAME),
        "dates": node(ids::DATES),
        "epitaph": node(ids::EPITAPH),
        "blood_drip": node(ids::BLOOD_DRIP),
    })
}

/// Get the default data directory (<data dir>/eclipse-memorial)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eclipse-memorial")
}
