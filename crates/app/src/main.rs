use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use serde::Deserialize;

use coach_core::model::{ActionPlan, AnalysisSnapshot, Skill, TaskId, TaskItem};
use coach_core::time::Clock;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug)]
struct FixtureError {
    path: PathBuf,
    message: String,
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixture {}: {}", self.path.display(), self.message)
    }
}

impl std::error::Error for FixtureError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    plan: ActionPlan,
    analysis: AnalysisSnapshot,
    open_plan_on_launch: bool,
}

impl UiApp for DesktopApp {
    fn action_plan(&self) -> ActionPlan {
        self.plan.clone()
    }

    fn analysis(&self) -> AnalysisSnapshot {
        self.analysis.clone()
    }

    fn open_plan_on_launch(&self) -> bool {
        self.open_plan_on_launch
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

struct Args {
    fixture: Option<PathBuf>,
    open_plan: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--fixture <json_path>] [--open-plan]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --fixture <json_path>     Demo data override (readiness, skills, tasks)");
    eprintln!("  --open-plan               Jump straight to the action plan on launch");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  COACH_FIXTURE, COACH_OPEN_PLAN");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut fixture = std::env::var("COACH_FIXTURE").ok().map(PathBuf::from);
        let mut open_plan = std::env::var("COACH_OPEN_PLAN")
            .ok()
            .is_some_and(|value| matches!(value.as_str(), "1" | "true"));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fixture" => {
                    let value = require_value(args, "--fixture")?;
                    fixture = Some(PathBuf::from(value));
                }
                "--open-plan" => {
                    open_plan = true;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { fixture, open_plan })
    }
}

/// On-disk demo data: a coaching snapshot the app renders instead of the
/// built-in one. Read once at startup; the app never writes it back.
#[derive(Debug, Deserialize)]
struct Fixture {
    readiness_percent: u8,
    skills: Vec<Skill>,
    tasks: Vec<TaskItem>,
}

fn load_fixture(path: &Path) -> Result<(AnalysisSnapshot, ActionPlan), FixtureError> {
    let raw = std::fs::read_to_string(path).map_err(|err| FixtureError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let fixture: Fixture = serde_json::from_str(&raw).map_err(|err| FixtureError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let analysis = AnalysisSnapshot::new(fixture.readiness_percent, fixture.skills).map_err(
        |err| FixtureError {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    )?;
    let plan = ActionPlan::new(fixture.tasks).map_err(|err| FixtureError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok((analysis, plan))
}

fn demo_analysis() -> Result<AnalysisSnapshot, coach_core::Error> {
    let skills = vec![
        Skill::new("Python", 45)?,
        Skill::new("JavaScript", 70)?,
        Skill::new("React", 35)?,
        Skill::new("SQL", 60)?,
        Skill::new("Communication", 80)?,
    ];
    Ok(AnalysisSnapshot::new(58, skills)?)
}

fn demo_plan() -> Result<ActionPlan, coach_core::Error> {
    let tasks = vec![
        TaskItem::new(TaskId::new(1), "Complete Python Essential Training (4h 30m)")?,
        TaskItem::new(TaskId::new(2), "Ship a small app after React.js Essential Training")?,
        TaskItem::new(TaskId::new(3), "Practice SQL interview questions")?,
        TaskItem::new(TaskId::new(4), "Rework the resume summary around data tooling")?,
        TaskItem::new(TaskId::new(5), "Ask a mentor to review one portfolio project")?,
    ];
    Ok(ActionPlan::new(tasks)?)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let (analysis, plan) = match parsed.fixture.as_deref() {
        Some(path) => {
            let loaded = load_fixture(path)?;
            tracing::info!(fixture = %path.display(), "loaded coaching fixture");
            loaded
        }
        None => (demo_analysis()?, demo_plan()?),
    };

    tracing::info!(
        tasks = plan.len(),
        skills = analysis.skills().len(),
        "starting Career Coach"
    );

    let app = DesktopApp {
        plan,
        analysis,
        open_plan_on_launch: parsed.open_plan,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Explicitly opt out of always-on-top so the window behaves like a
    // normal app window in dev setups where tao defaults differ.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Career Coach")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    dioxus::logger::initialize_default();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter)
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse(&[]).unwrap();
        assert!(!args.open_plan);
    }

    #[test]
    fn fixture_flag_takes_a_path() {
        let args = parse(&["--fixture", "demo.json", "--open-plan"]).unwrap();
        assert_eq!(args.fixture, Some(PathBuf::from("demo.json")));
        assert!(args.open_plan);
    }

    #[test]
    fn fixture_flag_requires_a_value() {
        let err = parse(&["--fixture"]).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { flag: "--fixture" }));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(arg) if arg == "--verbose"));
    }

    #[test]
    fn fixture_json_builds_validated_models() {
        let raw = r#"{
            "readiness_percent": 72,
            "skills": [
                { "name": "Python", "level_percent": 45 },
                { "name": "SQL", "level_percent": 60 }
            ],
            "tasks": [
                { "id": 1, "title": "Practice SQL interview questions" },
                { "id": 2, "title": "Finish the Python course", "completed": true }
            ]
        }"#;
        let fixture: Fixture = serde_json::from_str(raw).unwrap();
        let analysis = AnalysisSnapshot::new(fixture.readiness_percent, fixture.skills).unwrap();
        let plan = ActionPlan::new(fixture.tasks).unwrap();
        assert_eq!(analysis.readiness_percent(), 72);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.progress().completed, 1);
    }

    #[test]
    fn fixture_with_duplicate_task_ids_is_rejected() {
        let raw = r#"{
            "readiness_percent": 10,
            "skills": [],
            "tasks": [
                { "id": 3, "title": "One" },
                { "id": 3, "title": "Two" }
            ]
        }"#;
        let fixture: Fixture = serde_json::from_str(raw).unwrap();
        assert!(ActionPlan::new(fixture.tasks).is_err());
    }

    #[test]
    fn demo_data_is_well_formed() {
        let analysis = demo_analysis().unwrap();
        let plan = demo_plan().unwrap();
        assert_eq!(analysis.readiness_percent(), 58);
        assert_eq!(plan.progress().completed, 0);
        assert!(plan.len() > 0);
    }
}
