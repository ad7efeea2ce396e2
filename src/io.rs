use crate::model::{Day, EmployeeId, Planning, Shift, ShiftStatus};
use crate::planning::{DayReport, RestaurantRules};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de shifts: header `id,day,start,end[,status][,employees]`
///
/// `employees` est une liste d'identifiants séparés par `;`, `status` vaut
/// `pending` s'il est absent.
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Shift>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = line + 2;
        let id: u64 = rec
            .get(0)
            .context("missing id")?
            .trim()
            .parse()
            .with_context(|| format!("invalid id on row {row}"))?;
        let day: i64 = rec
            .get(1)
            .context("missing day")?
            .trim()
            .parse()
            .with_context(|| format!("invalid day on row {row}"))?;
        let start = rec.get(2).context("missing start")?;
        let end = rec.get(3).context("missing end")?;

        let mut shift = Shift::new(id, day, start, end)
            .with_context(|| format!("invalid shift {id} on row {row}"))?;

        if let Some(status) = rec.get(4).map(str::trim).filter(|s| !s.is_empty()) {
            shift.status = status
                .parse::<ShiftStatus>()
                .with_context(|| format!("invalid status for shift {id}"))?;
        }
        if let Some(employees) = rec.get(5).map(str::trim).filter(|s| !s.is_empty()) {
            shift.employee_ids = parse_employees(employees)
                .with_context(|| format!("invalid employees for shift {id}"))?;
        }
        out.push(shift);
    }
    #[cfg(feature = "logging")]
    tracing::debug!(shifts = out.len(), "shifts imported from csv");
    Ok(out)
}

fn parse_employees(raw: &str) -> anyhow::Result<Vec<EmployeeId>> {
    let mut ids = Vec::new();
    for chunk in raw.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let id: u64 = chunk.parse().with_context(|| format!("not an id: {chunk}"))?;
        let id = EmployeeId::new(id);
        if ids.contains(&id) {
            bail!("duplicate employee {id}");
        }
        ids.push(id);
    }
    Ok(ids)
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_planning_json<P: AsRef<Path>>(path: P, planning: &Planning) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(planning)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de la couverture: header `day,name,percentage,unique_employees,is_covered,gaps`
pub fn export_coverage_csv<P: AsRef<Path>>(path: P, reports: &[DayReport]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "day",
        "name",
        "percentage",
        "unique_employees",
        "is_covered",
        "gaps",
    ])?;
    for r in reports {
        let day: Day = r.coverage.day;
        w.write_record([
            day.index().to_string().as_str(),
            day.name(),
            r.percentage.to_string().as_str(),
            r.unique_employees.to_string().as_str(),
            if r.coverage.is_covered { "true" } else { "false" },
            r.coverage.formatted_message.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Charge des règles horaires depuis un JSON ; les champs absents gardent
/// leur valeur par défaut.
pub fn load_rules_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<RestaurantRules> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading rules {}", path.display()))?;
    let rules: RestaurantRules = serde_json::from_slice(&data)
        .with_context(|| format!("parsing rules {}", path.display()))?;
    rules.validate()?;
    Ok(rules)
}
