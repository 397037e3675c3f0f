//! Command handlers.
//!
//! Editing commands take the draft's lock, apply one change through the form
//! model and save. `validate` and `submit` only read the draft; submission
//! state is never written back. They build a [`Report`] and return whether
//! it passed, leaving the exit status to `main`.

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use log::info;

use loadset_core::file_io::load_draft_with_lock_check;
use loadset_core::form::{LoadForm, Submission};
use loadset_core::materials::Material;
use loadset_core::section::Section;
use loadset_core::{
    load_draft, save_draft, validate, FileLock, FormDraft, FormSettings, LoadSpec, SupportType,
};

use crate::{LoadFields, SectionShape};

/// Identifier written into lock files
fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "loadset".to_string())
}

/// Lock, load, edit, save.
fn edit_draft<T>(path: &Path, edit: impl FnOnce(&mut LoadForm) -> Result<T>) -> Result<T> {
    let _lock = FileLock::acquire(path, current_user())?;
    let mut draft = load_draft(path)?;
    let out = edit(draft.form_mut())?;
    save_draft(&draft, path)?;
    Ok(out)
}

fn apply_fields(form: &mut LoadForm, number: usize, fields: LoadFields) -> Result<()> {
    let id = form
        .row_id(number)
        .ok_or_else(|| anyhow!("No load row {} (draft has {})", number, form.rows.len()))?;

    if let Some(kind) = fields.kind {
        form.set_kind(id, kind)?;
    }
    if let Some(magnitude) = fields.magnitude {
        form.set_magnitude(id, magnitude)?;
    }
    if let Some(position) = fields.position {
        form.set_position(id, position)?;
    }
    if let Some(length) = fields.length {
        form.set_length(id, length)?;
    }
    Ok(())
}

pub fn cmd_new(
    path: &Path,
    label: String,
    author: String,
    settings_path: Option<&Path>,
    force: bool,
) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let settings = match settings_path {
        Some(p) => FormSettings::load(p)?,
        None => FormSettings::default(),
    };

    let draft = FormDraft::new(label, author, settings);
    let _lock = FileLock::acquire(path, current_user())?;
    save_draft(&draft, path)?;

    println!("Created {}", path.display());
    Ok(())
}

pub fn cmd_show(path: &Path, json: bool) -> Result<()> {
    let (draft, lock) = load_draft_with_lock_check(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
        return Ok(());
    }

    let form = &draft.form;
    println!("═══════════════════════════════════════");
    if draft.meta.label.is_empty() {
        println!("  {}", path.display());
    } else {
        println!("  {}", draft.meta.label);
    }
    println!("═══════════════════════════════════════");
    if let Some(lock) = lock {
        println!("  (locked by {} on {})", lock.user_id, lock.machine);
    }
    println!();
    println!("Beam:");
    println!("  Length:            {} m", form.beam_length);
    println!("  Young's modulus:   {} Pa", form.young_modulus);
    println!("  Moment of inertia: {} m^4", form.moment_of_inertia);
    println!("  Support:           {}", form.support);
    println!();
    println!("Loads:");
    for (i, row) in form.rows.iter().enumerate() {
        let mut line = format!(
            "  {}. {:<16} {} {:<4} at {} m (max {})",
            i + 1,
            row.kind.display_name(),
            row.magnitude,
            row.magnitude_unit(),
            row.position,
            row.position_max
        );
        if row.shows_length() {
            line.push_str(&format!(", length {} m", row.length));
        }
        println!("{}", line);
    }
    Ok(())
}

pub fn cmd_add_load(path: &Path, fields: LoadFields) -> Result<()> {
    let number = edit_draft(path, |form| {
        form.add_row();
        let number = form.rows.len();
        apply_fields(form, number, fields)?;
        Ok(number)
    })?;
    println!("Added load {}", number);
    Ok(())
}

pub fn cmd_remove_load(path: &Path, number: usize) -> Result<()> {
    edit_draft(path, |form| {
        let id = form
            .row_id(number)
            .ok_or_else(|| anyhow!("No load row {} (draft has {})", number, form.rows.len()))?;
        form.remove_row(id)?;
        Ok(())
    })?;
    println!("Removed load {}", number);
    Ok(())
}

pub fn cmd_set_load(path: &Path, number: usize, fields: LoadFields) -> Result<()> {
    edit_draft(path, |form| apply_fields(form, number, fields))?;
    println!("Updated load {}", number);
    Ok(())
}

pub fn cmd_set_beam(
    path: &Path,
    length: Option<String>,
    young_modulus: Option<String>,
    moment_of_inertia: Option<String>,
    support: Option<SupportType>,
) -> Result<()> {
    edit_draft(path, |form| {
        if let Some(length) = length {
            form.set_beam_length(length);
        }
        if let Some(e) = young_modulus {
            form.set_young_modulus(e);
        }
        if let Some(i) = moment_of_inertia {
            form.set_moment_of_inertia(i);
        }
        if let Some(support) = support {
            form.set_support(support);
        }
        Ok(())
    })?;
    println!("Updated beam");
    Ok(())
}

pub fn cmd_material(path: &Path, material: Material) -> Result<()> {
    edit_draft(path, |form| {
        form.apply_material(material);
        Ok(())
    })?;
    println!(
        "Young's modulus set to {} Pa ({})",
        material.young_modulus_pa(),
        material
    );
    Ok(())
}

pub fn cmd_section(path: &Path, shape: SectionShape) -> Result<()> {
    let section = match shape {
        SectionShape::Rect { width, height } => Section::Rectangular { width, height },
        SectionShape::Circle { diameter } => Section::Circular { diameter },
    };
    edit_draft(path, |form| {
        form.apply_section(section);
        Ok(())
    })?;
    println!("Moment of inertia set to {} m^4", section.moment_of_inertia());
    Ok(())
}

/// What a checking command prints, and whether it passed.
#[derive(Debug, Default)]
pub struct Report {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub ok: bool,
}

impl Report {
    fn print(&self) {
        for line in &self.stdout {
            println!("{}", line);
        }
        for line in &self.stderr {
            eprintln!("{}", line);
        }
    }
}

/// Parse and validate the form without changing its state.
fn validate_report(form: &LoadForm, json: bool) -> Result<Report> {
    let mut report = Report::default();

    let (beam, loads) = match form.extract() {
        Ok(values) => values,
        Err(e) => {
            if json {
                report.stdout.push(serde_json::to_string_pretty(&e)?);
            } else {
                report.stderr.push(format!("Error: {}", e));
            }
            return Ok(report);
        }
    };

    let result = validate(&beam, &loads);
    report.ok = result.ok;
    if json {
        report.stdout.push(serde_json::to_string_pretty(&result)?);
    } else if result.ok {
        report
            .stdout
            .push(format!("[OK] {} load(s) on a {} m beam", loads.len(), beam.length));
    } else {
        report
            .stderr
            .extend(result.errors.iter().map(|e| format!("[FAIL] {}", e)));
    }
    Ok(report)
}

/// Submit the form and describe the outcome.
fn submit_report(form: &mut LoadForm, json: bool) -> Result<Report> {
    let mut report = Report::default();
    let submission = form.submit();

    if json {
        report.stdout.push(serde_json::to_string_pretty(&submission)?);
    }

    match submission {
        Submission::Accepted { beam, loads } => {
            info!("handing off {} load(s)", loads.len());
            report.ok = true;
            if !json {
                let total: f64 = loads.iter().map(LoadSpec::total_force).sum();
                report
                    .stdout
                    .push(form.submit_state().submit_label().to_string());
                report.stdout.push(format!(
                    "Accepted: {} m {} beam, {} load(s), {} N total",
                    beam.length,
                    beam.support,
                    loads.len(),
                    total
                ));
            }
        }
        Submission::Blocked { errors } => {
            if !json {
                report
                    .stderr
                    .extend(errors.iter().map(|e| format!("Error: {}", e)));
            }
        }
        Submission::AlreadyInProgress => {
            if !json {
                report
                    .stderr
                    .push("Error: a submission is already in progress".to_string());
            }
        }
    }
    Ok(report)
}

/// Returns whether the draft passed.
pub fn cmd_validate(path: &Path, json: bool) -> Result<bool> {
    let draft = load_draft(path)?;
    let report = validate_report(&draft.form, json)?;
    report.print();
    Ok(report.ok)
}

/// Returns whether the submission was accepted.
pub fn cmd_submit(path: &Path, json: bool) -> Result<bool> {
    let mut draft = load_draft(path)?;
    let report = submit_report(&mut draft.form, json)?;
    report.print();
    Ok(report.ok)
}
