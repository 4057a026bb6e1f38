use crate::{bootstrap::AppConfig, cli::Command};
use anyhow::Context as _;
use partysplit_application::{RosterRepository, RosterStore, RosterStoreError};
use partysplit_domain::{Participant, SettlementEngine};
use partysplit_i18n as i18n;
use partysplit_presentation::{RosterPresenter, SettlementPresenter};
use std::{fs, io::Write};

/// Executes one command against the roster kept by `repository`, writing the
/// result to `out`.
pub fn run<R, W>(
    config: &AppConfig,
    repository: R,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: RosterRepository,
    W: Write,
{
    // An import replaces the roster wholesale, so it may also repair a file
    // that no longer decodes.
    let mut store = if matches!(command, Command::Import { .. }) {
        RosterStore::open_or_fresh(repository)
    } else {
        RosterStore::open(repository)?
    };

    match command {
        Command::List => {
            write!(out, "{}", RosterPresenter::render(store.roster()))?;
        }
        Command::Add {
            name,
            spent,
            alias,
            disabled,
        } => {
            let mut participant = Participant::new(name, spent, alias);
            if disabled {
                participant = participant.disabled();
            }
            let roster = store.add(participant)?;
            write!(out, "{}", RosterPresenter::render(&roster))?;
        }
        Command::Set {
            position,
            name,
            spent,
            alias,
        } => {
            let index = position.get() - 1;
            if let Some(spent) = spent {
                Participant::check_spent(spent).map_err(RosterStoreError::from)?;
            }
            if let Some(name) = name {
                store.update_name(index, name)?;
            }
            if let Some(spent) = spent {
                store.update_spent(index, spent)?;
            }
            if let Some(alias) = alias {
                store.update_alias(index, alias)?;
            }
            write!(out, "{}", RosterPresenter::render(store.roster()))?;
        }
        Command::Toggle { position } => {
            let roster = store.toggle_enabled(position.get() - 1)?;
            write!(out, "{}", RosterPresenter::render(&roster))?;
        }
        Command::Remove { position } => {
            let roster = store.remove_participant(position.get() - 1)?;
            write!(out, "{}", RosterPresenter::render(&roster))?;
        }
        Command::ClearSpent => {
            let roster = store.clear_spent()?;
            write!(out, "{}", RosterPresenter::render(&roster))?;
        }
        Command::Calculate { json, table } => {
            let engine = SettlementEngine::new(config.settlement);
            let transfers = store.calculate(&engine);
            if json {
                let document = serde_json::to_string_pretty(&transfers)
                    .context("Failed to serialize transfers")?;
                writeln!(out, "{document}")?;
            } else if table {
                write!(out, "{}", SettlementPresenter::render_table(&transfers))?;
            } else {
                write!(out, "{}", SettlementPresenter::render(&transfers))?;
            }
        }
        Command::Export { path } => {
            let document = store.export_document()?;
            fs::write(&path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "{}", i18n::exported_to(path.display()))?;
        }
        Command::Import { path } => {
            let document = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let roster = store.import_document(&document)?;
            writeln!(out, "{}", i18n::imported_participants(roster.len()))?;
        }
    }

    Ok(())
}

#[cfg(all(test, not(feature = "es")))]
mod tests {
    use super::*;
    use partysplit_domain::{Roster, RosterEditError, SettlementOptions};
    use rstest::{fixture, rstest};
    use std::num::NonZeroUsize;
    use tempfile::TempDir;

    struct Workspace {
        dir: TempDir,
        config: AppConfig,
    }

    impl Workspace {
        fn run(&self, command: Command) -> anyhow::Result<String> {
            let mut out = Vec::new();
            run(&self.config, self.config.repository(), command, &mut out)?;
            Ok(String::from_utf8(out).expect("utf-8 output"))
        }

        fn stored(&self) -> Option<Roster> {
            self.config.repository().load().expect("load")
        }
    }

    #[fixture]
    fn workspace() -> Workspace {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig {
            roster_path: dir.path().join("party_people.json"),
            settlement: SettlementOptions::default(),
        };
        Workspace { dir, config }
    }

    fn position(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("non-zero")
    }

    fn add(name: &str, spent: f64, alias: &str) -> Command {
        Command::Add {
            name: name.to_string(),
            spent,
            alias: alias.to_string(),
            disabled: false,
        }
    }

    fn calculate() -> Command {
        Command::Calculate {
            json: false,
            table: false,
        }
    }

    #[rstest]
    fn first_run_starts_with_a_blank_row(workspace: Workspace) {
        let output = workspace.run(Command::List).expect("list");

        assert!(output.contains("(unnamed)"));
        assert!(workspace.stored().is_none());
    }

    #[rstest]
    fn settles_a_party_end_to_end(workspace: Workspace) {
        workspace.run(Command::Remove { position: position(1) }).expect("remove blank");
        workspace.run(add("A", 90.0, "a.mp")).expect("add");
        workspace.run(add("B", 0.0, "b.mp")).expect("add");
        workspace.run(add("C", 0.0, "c.mp")).expect("add");

        let output = workspace.run(calculate()).expect("calculate");

        assert_eq!(
            output,
            "Transfers\n\
             B pays $30.00 to A (Alias: a.mp)\n\
             C pays $30.00 to A (Alias: a.mp)\n"
        );
    }

    #[rstest]
    fn calculate_json_prints_transfer_records(workspace: Workspace) {
        workspace
            .run(Command::Set {
                position: position(1),
                name: Some("A".to_string()),
                spent: Some(30.0),
                alias: Some("a.mp".to_string()),
            })
            .expect("set");
        workspace.run(add("B", 10.0, "b.mp")).expect("add");
        workspace.run(add("C", 20.0, "c.mp")).expect("add");

        let output = workspace
            .run(Command::Calculate {
                json: true,
                table: false,
            })
            .expect("calculate");

        let value: serde_json::Value = serde_json::from_str(&output).expect("json output");
        assert_eq!(
            value,
            serde_json::json!([{"from": "B", "to": "A", "alias": "a.mp", "amount": "10.00"}])
        );
    }

    #[rstest]
    fn toggled_participant_is_left_out(workspace: Workspace) {
        workspace.run(Command::Remove { position: position(1) }).expect("remove blank");
        workspace.run(add("A", 30.0, "a.mp")).expect("add");
        workspace.run(add("B", 10.0, "b.mp")).expect("add");
        workspace.run(add("C", 20.0, "c.mp")).expect("add");
        workspace.run(Command::Toggle { position: position(2) }).expect("toggle");

        let output = workspace.run(calculate()).expect("calculate");

        assert_eq!(output, "Transfers\nC pays $5.00 to A (Alias: a.mp)\n");
    }

    #[rstest]
    fn clear_spent_leaves_nothing_to_settle(workspace: Workspace) {
        workspace.run(add("A", 30.0, "a.mp")).expect("add");
        workspace.run(Command::ClearSpent).expect("clear");

        let output = workspace.run(calculate()).expect("calculate");

        assert_eq!(output, "Nothing to settle.\n");
    }

    #[rstest]
    fn export_and_import_move_the_roster(workspace: Workspace) {
        workspace.run(add("A", 12.5, "a.mp")).expect("add");
        let export_path = workspace.dir.path().join("export.json");
        workspace
            .run(Command::Export {
                path: export_path.clone(),
            })
            .expect("export");
        let exported = workspace.stored().expect("stored roster");

        workspace.run(Command::ClearSpent).expect("clear");
        let output = workspace
            .run(Command::Import { path: export_path })
            .expect("import");

        assert_eq!(output, "Imported 2 participants\n");
        assert_eq!(workspace.stored(), Some(exported));
    }

    #[rstest]
    fn rejected_import_keeps_the_roster(workspace: Workspace) {
        workspace.run(add("A", 12.5, "a.mp")).expect("add");
        let before = workspace.stored();
        let bad = workspace.dir.path().join("bad.json");
        fs::write(&bad, r#"{"people": []}"#).expect("write");

        let err = workspace
            .run(Command::Import { path: bad })
            .expect_err("import must fail");

        assert!(err.downcast_ref::<RosterStoreError>().is_some());
        assert_eq!(workspace.stored(), before);
    }

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn non_finite_spending_is_refused(workspace: Workspace, #[case] spent: f64) {
        workspace.run(add("A", 30.0, "a.mp")).expect("add");
        let before = workspace.stored();

        let err = workspace
            .run(Command::Set {
                position: position(1),
                name: None,
                spent: Some(spent),
                alias: None,
            })
            .expect_err("set must fail");

        assert!(matches!(
            err.downcast_ref::<RosterStoreError>(),
            Some(RosterStoreError::Edit(RosterEditError::NonFiniteSpent { .. }))
        ));
        assert_eq!(workspace.stored(), before);
        workspace.run(Command::List).expect("roster still opens");
    }

    #[rstest]
    fn import_repairs_an_unreadable_roster_file(workspace: Workspace) {
        fs::write(&workspace.config.roster_path, r#"[{"spent": null}]"#).expect("write");
        assert!(workspace.run(Command::List).is_err());

        let source = workspace.dir.path().join("party.json");
        fs::write(&source, r#"[{"name": "A", "spent": 30, "alias": "a.mp"}]"#).expect("write");
        let output = workspace
            .run(Command::Import { path: source })
            .expect("import");

        assert_eq!(output, "Imported 1 participants\n");
        assert_eq!(
            workspace.stored(),
            Some(Roster::new(vec![Participant::new("A", 30.0, "a.mp")]))
        );
    }

    #[rstest]
    fn editing_a_missing_position_fails(workspace: Workspace) {
        let err = workspace
            .run(Command::Toggle { position: position(7) })
            .expect_err("toggle must fail");

        assert!(matches!(
            err.downcast_ref::<RosterStoreError>(),
            Some(RosterStoreError::Edit(_))
        ));
    }
}
