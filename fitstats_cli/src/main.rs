use clap::{Args, Parser, Subcommand};
use fitstats_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitstats")]
#[command(about = "Body profile tracker with derived health stats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print derived stats from the stored profile (default)
    Stats {
        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the stored profile
    Show,

    /// Update profile fields
    Set(SetArgs),
}

#[derive(Args)]
struct SetArgs {
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: Option<String>,

    /// Sex category (male, female, other, unspecified)
    #[arg(long)]
    sex: Option<String>,

    /// Height in centimetres
    #[arg(long)]
    height_cm: Option<f64>,

    /// Height: whole feet (combined with --inches)
    #[arg(long, conflicts_with = "height_cm")]
    feet: Option<f64>,

    /// Height: inches (combined with --feet)
    #[arg(long, conflicts_with = "height_cm")]
    inches: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: Option<f64>,

    /// Weight in pounds
    #[arg(long, conflicts_with = "weight_kg")]
    lbs: Option<f64>,

    /// Neck circumference in centimetres
    #[arg(long)]
    neck_cm: Option<f64>,

    /// Waist circumference in centimetres
    #[arg(long)]
    waist_cm: Option<f64>,

    /// Hip circumference in centimetres
    #[arg(long)]
    hips_cm: Option<f64>,

    /// Activity level (sedentary, light, moderate, active, very_active)
    #[arg(long)]
    activity: Option<String>,
}

fn main() -> Result<()> {
    // Keep stdout clean for command output; RUST_LOG can raise verbosity
    fitstats_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let profile_path = data_dir.join("profile.json");

    match cli.command {
        Some(Commands::Stats { json }) => cmd_stats(&profile_path, json),
        Some(Commands::Show) => cmd_show(&profile_path, config.display.units),
        Some(Commands::Set(args)) => cmd_set(&profile_path, args),
        None => cmd_stats(&profile_path, false),
    }
}

fn cmd_stats(profile_path: &std::path::Path, json: bool) -> Result<()> {
    let profile = Profile::load(profile_path)?;
    let today = chrono::Local::now().date_naive();
    let stats = derive_stats(&profile, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    match stats {
        DerivedStats::Incomplete { missing_fields } => {
            let list: Vec<String> = missing_fields.iter().map(|f| f.to_string()).collect();
            println!("Profile incomplete. Missing: {}", list.join(", "));
            println!("Use `fitstats set` to fill in the missing fields.");
        }
        DerivedStats::Ready {
            age_years,
            bmi,
            body_fat_percent,
            bmr_kcal,
            tdee_kcal,
        } => {
            println!("Age:      {} years", age_years);
            println!("BMI:      {:.1}", bmi);
            match body_fat_percent {
                BodyFat::Percent(pct) => println!("Body fat: {:.1}%", pct),
                BodyFat::Inapplicable => println!("Body fat: not available"),
            }
            println!("BMR:      {:.0} kcal/day", bmr_kcal);
            println!("TDEE:     {:.0} kcal/day", tdee_kcal);
        }
    }

    Ok(())
}

fn cmd_show(profile_path: &std::path::Path, units: UnitSystem) -> Result<()> {
    let profile = Profile::load(profile_path)?;

    println!(
        "Date of birth: {}",
        profile
            .date_of_birth
            .map_or_else(|| "not set".into(), |d| d.to_string())
    );
    println!(
        "Sex:           {}",
        profile
            .sex
            .map_or_else(|| "not set".into(), |s| s.to_string())
    );
    println!("Height:        {}", fmt_length(profile.height_cm, units));
    println!("Weight:        {}", fmt_weight(profile.weight_kg, units));
    println!("Neck:          {}", fmt_short_length(profile.neck_cm, units));
    println!("Waist:         {}", fmt_short_length(profile.waist_cm, units));
    println!("Hips:          {}", fmt_short_length(profile.hips_cm, units));
    println!(
        "Activity:      {}",
        profile
            .activity_level
            .map_or_else(|| "not set".into(), |a| a.to_string())
    );
    if let Some(updated_at) = profile.updated_at {
        println!("Updated:       {}", updated_at.to_rfc3339());
    }

    Ok(())
}

fn cmd_set(profile_path: &std::path::Path, args: SetArgs) -> Result<()> {
    // Parse and convert up front so a bad flag leaves the profile untouched
    let date_of_birth = args
        .dob
        .as_deref()
        .map(|s| s.parse::<chrono::NaiveDate>())
        .transpose()?;
    let sex = args.sex.as_deref().map(str::parse::<Sex>).transpose()?;
    let activity_level = args
        .activity
        .as_deref()
        .map(str::parse::<ActivityLevel>)
        .transpose()?;

    // Imperial input is converted at this boundary; storage stays metric
    let height_cm = args
        .height_cm
        .or_else(|| units::ft_in_to_cm(args.feet, args.inches));
    let weight_kg = args.weight_kg.or_else(|| units::lbs_to_kg(args.lbs));

    Profile::update(profile_path, |p| {
        if date_of_birth.is_some() {
            p.date_of_birth = date_of_birth;
        }
        if sex.is_some() {
            p.sex = sex;
        }
        if height_cm.is_some() {
            p.height_cm = height_cm;
        }
        if weight_kg.is_some() {
            p.weight_kg = weight_kg;
        }
        if args.neck_cm.is_some() {
            p.neck_cm = args.neck_cm;
        }
        if args.waist_cm.is_some() {
            p.waist_cm = args.waist_cm;
        }
        if args.hips_cm.is_some() {
            p.hips_cm = args.hips_cm;
        }
        if activity_level.is_some() {
            p.activity_level = activity_level;
        }
        Ok(())
    })?;

    tracing::info!("Profile updated at {:?}", profile_path);
    println!("Profile saved.");

    Ok(())
}

fn fmt_length(value_cm: Option<f64>, units: UnitSystem) -> String {
    match (value_cm, units) {
        (None, _) => "not set".into(),
        (Some(cm), UnitSystem::Metric) => format!("{:.1} cm", cm),
        (Some(cm), UnitSystem::Imperial) => units::cm_to_ft_in(cm).to_string(),
    }
}

fn fmt_short_length(value_cm: Option<f64>, units: UnitSystem) -> String {
    match (value_cm, units) {
        (None, _) => "not set".into(),
        (Some(cm), UnitSystem::Metric) => format!("{:.1} cm", cm),
        (Some(cm), UnitSystem::Imperial) => format!("{:.1} in", units::cm_to_in(cm)),
    }
}

fn fmt_weight(value_kg: Option<f64>, units: UnitSystem) -> String {
    match (value_kg, units) {
        (None, _) => "not set".into(),
        (Some(kg), UnitSystem::Metric) => format!("{:.1} kg", kg),
        (Some(kg), UnitSystem::Imperial) => format!("{:.1} lbs", units::kg_to_lbs(kg)),
    }
}
