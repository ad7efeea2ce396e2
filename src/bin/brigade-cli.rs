#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use brigade::{
    io,
    model::{Day, EmployeeId, Planning, Shift, ShiftId, ShiftStatus},
    planning::{employee_hours, get_unique_employees_per_day, RestaurantRules, Severity},
    storage::{JsonStorage, Storage},
    time::TimeOfDay,
};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de contrôle des plannings d'un restaurant
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du planning
    #[arg(long, global = true, default_value = "planning.json")]
    planning: String,

    /// Règles horaires (JSON) ; valeurs par défaut sinon
    #[arg(long, global = true)]
    rules: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter ou remplacer un shift
    AddShift {
        #[arg(long)]
        id: u64,
        /// 0 = lundi ... 6 = dimanche
        #[arg(long)]
        day: i64,
        /// HH:MM
        #[arg(long)]
        start: String,
        /// HH:MM (avant `start` = lendemain)
        #[arg(long)]
        end: String,
        #[arg(long, default_value = "pending")]
        status: String,
        /// liste "1,2,..."
        #[arg(long)]
        employees: Option<String>,
    },

    /// Importer des shifts depuis un CSV
    Import {
        #[arg(long)]
        csv: String,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Vérifier les règles métier (tous les shifts ou un seul)
    Validate {
        #[arg(long)]
        shift_id: Option<u64>,
    },

    /// Détecter les employés affectés à deux shifts qui se chevauchent
    Overlaps,

    /// Couverture horaire par jour
    Coverage {
        #[arg(long, conflicts_with = "date")]
        day: Option<i64>,
        /// Date calendaire (AAAA-MM-JJ), convertie en jour de semaine
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Export CSV (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Tester un créneau horaire
    Slot {
        #[arg(long)]
        day: i64,
        /// HH:MM
        #[arg(long)]
        time: String,
    },

    /// Nombre d'employés distincts par jour
    Staff {
        #[arg(long)]
        day: Option<i64>,
    },

    /// Heures travaillées par employé
    Hours,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let rules = match &cli.rules {
        Some(path) => io::load_rules_from_file(path)?,
        None => RestaurantRules::default(),
    };

    let storage = JsonStorage::open(&cli.planning)?;
    let mut planning = if storage.exists() {
        storage.load()?
    } else {
        Planning::default()
    };

    let code = match cli.cmd {
        Commands::AddShift {
            id,
            day,
            start,
            end,
            status,
            employees,
        } => {
            let mut shift = Shift::new(id, day, &start, &end)?;
            shift.status = status.parse::<ShiftStatus>()?;
            if let Some(list) = employees {
                shift.employee_ids = parse_employee_list(&list)?;
            }
            for w in rules.validate_shift(&shift) {
                eprintln!("{}: {}", severity_label(w.severity), w.message);
            }
            planning.upsert(vec![shift]);
            storage.save(&planning)?;
            0
        }
        Commands::Import { csv } => {
            let shifts = io::import_shifts_csv(&csv)?;
            println!("{} shift(s) importé(s)", shifts.len());
            planning.upsert(shifts);
            storage.save(&planning)?;
            0
        }
        Commands::List { out_json } => {
            if let Some(path) = out_json {
                io::export_planning_json(path, &planning)?;
            }
            for s in &planning.shifts {
                let employees = s
                    .employee_ids
                    .iter()
                    .map(EmployeeId::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                println!(
                    "{} | {} | {} → {} ({} h{}) | {} | {}",
                    s.id,
                    s.day,
                    s.start_time,
                    s.end_time,
                    s.duration_hours(),
                    if s.is_night() { ", nuit" } else { "" },
                    s.status.as_str(),
                    if employees.is_empty() { "-" } else { employees.as_str() }
                );
            }
            0
        }
        Commands::Validate { shift_id } => {
            let results = match shift_id {
                Some(raw) => {
                    let id = ShiftId::new(raw);
                    vec![(id, planning.validate_one(id, &rules)?)]
                }
                None => planning.validate_all(&rules),
            };
            let mut found = 0usize;
            for (id, warnings) in &results {
                for w in warnings {
                    found += 1;
                    println!(
                        "shift {} | {} {} | {}",
                        id,
                        severity_label(w.severity),
                        w.kind.as_str(),
                        w.message
                    );
                }
            }
            if found == 0 {
                println!("OK: aucun avertissement");
                0
            } else {
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Overlaps => {
            let conflicts = planning.detect_conflicts();
            if conflicts.is_empty() {
                println!("OK: aucun chevauchement");
                0
            } else {
                for c in &conflicts {
                    let employees = c
                        .employees
                        .iter()
                        .map(EmployeeId::to_string)
                        .collect::<Vec<_>>()
                        .join(",");
                    println!(
                        "{} | shifts {} et {} | employé(s) {}",
                        c.day, c.shift_a, c.shift_b, employees
                    );
                }
                2
            }
        }
        Commands::Coverage { day, date, report } => {
            let selected = match (day, date) {
                (Some(d), _) => Some(Day::new(d)?),
                (None, Some(date)) => Some(Day::from_weekday(date.weekday())),
                (None, None) => None,
            };
            let mut reports = rules.week_report(&planning.shifts);
            if let Some(day) = selected {
                reports.retain(|r| r.coverage.day == day);
            }
            for r in &reports {
                println!(
                    "{:<9} | {:>3}% | {} employé(s) | {}",
                    r.coverage.day.name(),
                    r.percentage,
                    r.unique_employees,
                    r.coverage.formatted_message
                );
            }
            if let Some(path) = report {
                io::export_coverage_csv(path, &reports)?;
            }
            if reports.iter().all(|r| r.coverage.is_covered) {
                0
            } else {
                2
            }
        }
        Commands::Slot { day, time } => {
            let day = Day::new(day)?;
            let slot: TimeOfDay = time.parse()?;
            if rules.is_time_slot_covered(slot, &planning.shifts, day) {
                println!("{} {}: couvert", day, slot);
                0
            } else {
                println!("{} {}: non couvert", day, slot);
                2
            }
        }
        Commands::Staff { day } => {
            let days: Vec<Day> = match day {
                Some(d) => vec![Day::new(d)?],
                None => Day::week().collect(),
            };
            for d in days {
                println!(
                    "{}: {}",
                    d,
                    get_unique_employees_per_day(&planning.shifts, d)
                );
            }
            0
        }
        Commands::Hours => {
            let totals = employee_hours(&planning.shifts);
            if totals.is_empty() {
                bail!("aucun shift confirmé dans le planning");
            }
            for (employee, hours) in totals {
                println!("employé {employee}: {hours} h");
            }
            0
        }
    };

    std::process::exit(code);
}

fn parse_employee_list(raw: &str) -> Result<Vec<EmployeeId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map(EmployeeId::new)
                .with_context(|| format!("invalid employee id: {s}"))
        })
        .collect()
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
}
