//! xpcurve - Entry Point
//!
//! Command line tool for inspecting the level curve and awarding XP
//! to a locally saved learner profile.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use xpcurve::data::{LevelingConfig, DEFAULT_CONFIG_PATH};
use xpcurve::progression::{Activity, Level, LevelCurve, LevelTitle};
use xpcurve::save::{load_or_create, load_profile, profile_path, save_profile, LearnerProfile};

#[derive(Parser)]
#[command(name = "xpcurve")]
#[command(version, about = "Experience curve and learner progression")]
struct Cli {
    /// Leveling config (RON)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level info for XP totals
    Info {
        /// Lifetime XP totals
        #[arg(required = true)]
        xp: Vec<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print thresholds and step costs
    Table {
        /// Number of levels to print
        #[arg(long, default_value_t = 20)]
        levels: u32,
    },

    /// Award XP for an activity to the saved profile
    Award {
        activity: ActivityKind,
        /// Score, word count, minutes or challenge reward
        #[arg(default_value_t = 0)]
        amount: u32,
        /// Profile file (defaults to the platform data dir)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Show the saved profile
    Profile {
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Write the active config as RON
    ExportConfig {
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ActivityKind {
    Article,
    Quiz,
    Words,
    Reading,
    Challenge,
}

impl ActivityKind {
    fn with_amount(self, amount: u32) -> Activity {
        match self {
            ActivityKind::Article => Activity::ArticleRead,
            ActivityKind::Quiz => Activity::QuizCompleted { score: amount },
            ActivityKind::Words => Activity::WordsLearned { count: amount },
            ActivityKind::Reading => Activity::ReadingTime { minutes: amount },
            ActivityKind::Challenge => Activity::ChallengeCompleted { reward: amount as u64 },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = LevelingConfig::load_or_default(&cli.config);
    let curve = config.build_curve().context("invalid curve in leveling config")?;

    match cli.command {
        Commands::Info { xp, json } => {
            for total in xp {
                let info = curve.snapshot(total);
                if json {
                    println!("{}", serde_json::to_string(&info)?);
                } else {
                    println!("{} ({}, {}%)", info, info.title, info.percentage);
                }
            }
        }
        Commands::Table { levels } => print_table(&curve, levels)?,
        Commands::Award { activity, amount, profile } => {
            let path = profile.unwrap_or_else(profile_path);
            // never overwrite a profile we failed to read
            let mut learner = if path.exists() {
                load_profile(&path).with_context(|| format!("failed to load profile {:?}", path))?
            } else {
                LearnerProfile::new()
            };
            let now = now_millis();
            learner.refresh_challenges(now);
            let outcome =
                learner.record_activity(&curve, &config.rewards, &activity.with_amount(amount), now);

            println!("+{} XP", outcome.xp_gained);
            if outcome.leveled_up() {
                println!("Level up! {} -> {}", outcome.old_level, outcome.new_level);
            }
            for badge in &outcome.badges_earned {
                println!("Badge earned: {} ({})", badge.name, badge.description);
            }
            for id in &outcome.challenges_completed {
                println!("Challenge completed: {}", id);
            }
            println!("{}", learner.info(&curve));

            save_profile(&learner, &path)
                .with_context(|| format!("failed to save profile to {:?}", path))?;
        }
        Commands::Profile { profile } => {
            let path = profile.unwrap_or_else(profile_path);
            let learner = load_or_create(&path);
            let info = learner.info(&curve);
            println!("{} - {}", info, info.title);
            for badge in &learner.badges {
                println!("  badge: {}", badge);
            }
            let now = now_millis();
            for challenge in learner.challenges.iter().filter(|c| !c.is_expired(now)) {
                let status = if challenge.completed { "done" } else { "open" };
                println!(
                    "  challenge: {} {}/{} ({}, +{} XP)",
                    challenge.title, challenge.current, challenge.target, status, challenge.xp_reward
                );
            }
            for record in &learner.history {
                println!("  +{} {}", record.amount, record.reason);
            }
        }
        Commands::ExportConfig { path } => config.export(&path)?,
    }

    Ok(())
}

/// Wall clock in unix milliseconds
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn print_table(curve: &LevelCurve, levels: u32) -> Result<()> {
    println!("{:>6} {:>14} {:>12}  title", "level", "threshold", "step");
    for n in 1..=levels {
        let level = Level::new(n)?;
        println!(
            "{:>6} {:>14} {:>12}  {}",
            level.get(),
            curve.threshold_for_level(level),
            curve.step_cost(level),
            LevelTitle::for_level(level),
        );
    }
    Ok(())
}
