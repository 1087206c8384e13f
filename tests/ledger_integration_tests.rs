use std::time::{Duration, Instant};

use tally::core::action::{Action, Effect, update};
use tally::core::config::{CliOverrides, StorageTarget, TallyConfig, resolve};
use tally::core::expense::Amount;
use tally::core::input::Field;
use tally::core::persistence::PersistentLedger;
use tally::core::state::App;
use tally::core::storage::{JsonFileStorage, LedgerStorage};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn open(dir: &TempDir) -> PersistentLedger {
    PersistentLedger::open(Box::new(JsonFileStorage::new(dir.path().join("expenses.json"))))
}

fn app_at(dir: &TempDir) -> App {
    let overrides = CliOverrides {
        data_file: Some(dir.path().join("expenses.json")),
        ephemeral: false,
    };
    let config = resolve(&TallyConfig::default(), &overrides);
    assert_eq!(
        config.storage,
        StorageTarget::File(dir.path().join("expenses.json"))
    );
    App::new(tally::tui::build_storage(&config), &config)
}

fn add(app: &mut App, title: &str, amount: &str) -> Effect {
    update(app, Action::EditTitle(title.to_string()));
    update(app, Action::EditAmount(amount.to_string()));
    update(app, Action::Submit)
}

// ============================================================================
// Ledger + JSON file
// ============================================================================

#[test]
fn test_empty_storage_starts_empty() {
    let dir = TempDir::new().unwrap();
    let ledger = open(&dir);
    assert!(ledger.records().is_empty());
    assert_eq!(ledger.compute_total(), Amount::ZERO);
    assert!(ledger.warning().is_none());
}

#[test]
fn test_expenses_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut ledger = open(&dir);
        ledger.add_expense("Coffee", "3.50").unwrap();
        ledger.add_expense("Book", "12").unwrap();
    }

    let ledger = open(&dir);
    let titles: Vec<&str> = ledger.records().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Book", "Coffee"]);
    assert_eq!(ledger.compute_total(), Amount::from_minor(1550));
}

#[test]
fn test_delete_is_persisted() {
    let dir = TempDir::new().unwrap();
    let coffee = {
        let mut ledger = open(&dir);
        let coffee = ledger.add_expense("Coffee", "3.50").unwrap();
        ledger.add_expense("Book", "12").unwrap();
        ledger.delete_expense(coffee).unwrap();
        coffee
    };

    let ledger = open(&dir);
    assert_eq!(ledger.records().len(), 1);
    assert!(ledger.records().iter().all(|r| r.id != coffee));
    assert_eq!(ledger.compute_total(), Amount::from_minor(1200));
}

#[test]
fn test_rejected_input_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut ledger = open(&dir);
    assert!(ledger.add_expense("   ", "5").is_none());
    assert!(ledger.add_expense("Lunch", "").is_none());
    assert!(ledger.add_expense("Lunch", "abc").is_none());
    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn test_zero_amount_is_recorded() {
    let dir = TempDir::new().unwrap();
    {
        let mut ledger = open(&dir);
        ledger.add_expense("Free sample", "0").unwrap();
    }

    let ledger = open(&dir);
    assert_eq!(ledger.records().len(), 1);
    assert_eq!(ledger.records()[0].amount, Amount::ZERO);
    assert_eq!(ledger.compute_total(), Amount::ZERO);
}

#[test]
fn test_file_holds_json_array() {
    let dir = TempDir::new().unwrap();
    let mut ledger = open(&dir);
    let id = ledger.add_expense("Taxi", "7.25").unwrap();

    let text = std::fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "id": id.0, "title": "Taxi", "amount": 7.25 }])
    );
}

#[test]
fn test_hand_edited_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    std::fs::write(
        &path,
        r#"[{"id":2,"title":"Rent","amount":500},{"id":1,"title":"Tea","amount":0.5}]"#,
    )
    .unwrap();

    let storage = JsonFileStorage::new(&path);
    let records = storage.load().unwrap();
    assert_eq!(records.len(), 2);

    let mut ledger = open(&dir);
    assert_eq!(ledger.compute_total(), Amount::from_minor(50050));
    // New ids never collide with loaded ones
    let id = ledger.add_expense("Snack", "1").unwrap();
    assert!(id.0 > 2);
}

#[test]
fn test_corrupt_file_surfaces_warning() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("expenses.json"), "{ not json").unwrap();

    let app = app_at(&dir);
    assert!(app.ledger.records().is_empty());
    assert!(app.status_message.starts_with("Could not load saved expenses"));
}

#[test]
fn test_unreadable_file_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    // Trailing comma: rejected by serde_json, but easy to repair by hand
    let original = r#"[{"id":1,"title":"Rent","amount":500},{"id":2,"title":"Tea","amount":0.5},]"#;
    std::fs::write(&path, original).unwrap();

    let mut ledger = open(&dir);
    assert!(ledger.warning().is_some());
    let id = ledger.add_expense("Snack", "1").unwrap();
    ledger.add_expense("Bus", "2").unwrap();
    ledger.delete_expense(id).unwrap();

    assert_eq!(ledger.records().len(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

// ============================================================================
// Full App flow
// ============================================================================

#[test]
fn test_app_flow_add_animate_delete() {
    let dir = TempDir::new().unwrap();
    let mut app = app_at(&dir);
    update(&mut app, Action::Focus(Field::Title));

    assert_eq!(add(&mut app, "Coffee", "3.50"), Effect::AmountTextChanged);
    assert_eq!(app.status_message, "Added Coffee 3.5 INR");
    assert_eq!(app.input.title(), "");
    assert_eq!(app.input.raw_amount(), "");

    // Typing an amount animates the readout toward it
    update(&mut app, Action::Focus(Field::Amount));
    update(&mut app, Action::EditAmount("120".to_string()));
    assert!(app.interpolator.is_animating());
    let start = Instant::now();
    app.interpolator.tick(start);
    app.interpolator.tick(start + Duration::from_secs(1));
    assert_eq!(app.interpolator.displayed(), 120);
    assert!(!app.interpolator.is_animating());

    update(&mut app, Action::EditTitle("Book".to_string()));
    update(&mut app, Action::Submit);
    assert_eq!(app.ledger.compute_total(), Amount::from_minor(12350));

    let book = app.ledger.records()[0].id;
    update(&mut app, Action::Delete(book));
    assert_eq!(app.status_message, "Deleted Book");

    let reopened = app_at(&dir);
    assert_eq!(reopened.ledger.records().len(), 1);
    assert_eq!(reopened.ledger.records()[0].title, "Coffee");
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

#[test]
fn test_ephemeral_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    let mut config = TallyConfig::default();
    config.storage.data_file = Some(path.to_string_lossy().into_owned());
    let overrides = CliOverrides {
        data_file: Some(path.clone()),
        ephemeral: true,
    };
    let resolved = resolve(&config, &overrides);
    assert_eq!(resolved.storage, StorageTarget::Ephemeral);

    let mut app = App::new(tally::tui::build_storage(&resolved), &resolved);
    add(&mut app, "Coffee", "3");
    assert_eq!(app.ledger.records().len(), 1);
    assert!(app.ledger.warning().is_none());
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    // The same settings without the flag do write to that file
    let overrides = CliOverrides {
        ephemeral: false,
        ..overrides
    };
    let resolved = resolve(&config, &overrides);
    let mut app = App::new(tally::tui::build_storage(&resolved), &resolved);
    add(&mut app, "Coffee", "3");
    assert!(path.exists());
}
