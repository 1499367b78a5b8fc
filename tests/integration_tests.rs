use page_behavior::core::modal::ModalState;
use page_behavior::core::search::SearchOutcome;
use page_behavior::core::table::{compare_text, sort_order};
use page_behavior::domain::model::{Download, ModalAction};
use page_behavior::utils::logger::init_logger;
use page_behavior::{
    DeleteDecision, Detach, FieldDescriptor, FieldState, FormField, ListenerRegistry, PageConfig,
    PageController, PageHost, PageKind, Phase, Result, SortMode,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every side effect the controller asks of the page.
#[derive(Default)]
struct RecordingHost {
    path: String,
    accept_confirm: bool,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    downloads: RefCell<Vec<Download>>,
    printed: RefCell<Vec<(String, u32)>>,
}

impl RecordingHost {
    fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Default::default()
        }
    }
}

impl PageHost for RecordingHost {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.accept_confirm
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn location_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&self, href: &str) -> Result<()> {
        self.navigations.borrow_mut().push(href.to_string());
        Ok(())
    }

    fn download(&self, download: &Download) -> Result<()> {
        self.downloads.borrow_mut().push(download.clone());
        Ok(())
    }

    fn print_document(&self, document: &str, delay_ms: u32) -> Result<()> {
        self.printed.borrow_mut().push((document.to_string(), delay_ms));
        Ok(())
    }
}

/// A field that keeps a rendered error sibling the way the page does:
/// at most one, replaced on every render.
struct PageField {
    descriptor: FieldDescriptor,
    value: RefCell<String>,
    state: RefCell<FieldState>,
    error_siblings: RefCell<Vec<String>>,
}

impl PageField {
    fn new(input_type: &str, name: &str, required: bool, value: &str) -> Self {
        Self {
            descriptor: FieldDescriptor::input(input_type, name, required),
            value: RefCell::new(value.to_string()),
            state: RefCell::new(FieldState::Valid),
            error_siblings: RefCell::new(Vec::new()),
        }
    }
}

impl FormField for PageField {
    fn descriptor(&self) -> FieldDescriptor {
        self.descriptor.clone()
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    fn render(&self, state: &FieldState) -> Result<()> {
        let mut siblings = self.error_siblings.borrow_mut();
        siblings.clear();
        if let Some(message) = state.message() {
            siblings.push(message.to_string());
        }
        *self.state.borrow_mut() = state.clone();
        Ok(())
    }
}

#[test]
fn test_empty_required_fields_block_submission() {
    init_logger(true);
    let controller = PageController::new(RecordingHost::at("/students/new"), PageConfig::default());
    let fields = vec![
        PageField::new("text", "s_name", true, "   "),
        PageField::new("email", "s_email", true, ""),
        PageField::new("text", "student_id", true, "S001"),
    ];

    let may_submit = controller.validate_form(&fields).unwrap();

    assert!(!may_submit);
    assert!(!fields[0].state.borrow().is_valid());
    assert!(!fields[1].state.borrow().is_valid());
    assert!(fields[2].state.borrow().is_valid());
    // pre-submit marks have no message
    assert!(fields.iter().all(|f| f.error_siblings.borrow().is_empty()));
}

#[test]
fn test_invalid_phone_by_name_blocks_submission() {
    let controller = PageController::new(RecordingHost::default(), PageConfig::default());
    let fields = vec![PageField::new("text", "s_phone", true, "12-34")];

    assert!(!controller.validate_form(&fields).unwrap());

    fields[0].set_value("+1 (555) 123-4567");
    assert!(controller.validate_form(&fields).unwrap());
    assert_eq!(*fields[0].state.borrow(), FieldState::Valid);
}

#[test]
fn test_mark_then_clear_leaves_no_error_sibling() {
    let controller = PageController::new(RecordingHost::default(), PageConfig::default());
    let field = PageField::new("email", "s_email", false, "not-an-email");

    controller.validate_on_blur(&field).unwrap();
    controller.validate_on_blur(&field).unwrap();
    assert_eq!(
        *field.error_siblings.borrow(),
        vec!["Please enter a valid email address".to_string()]
    );

    field.set_value("ana@example.com");
    controller.validate_on_blur(&field).unwrap();
    assert!(field.error_siblings.borrow().is_empty());
    assert!(field.state.borrow().is_valid());
}

#[test]
fn test_search_scenario_navigates_with_encoded_query() {
    let controller = PageController::new(RecordingHost::at("/students"), PageConfig::default());

    let outcome = controller.perform_search("cat dog").unwrap();

    assert_eq!(
        outcome,
        SearchOutcome::Navigate("/students?search=cat%20dog".to_string())
    );
    assert_eq!(
        *controller.host().navigations.borrow(),
        vec!["/students?search=cat%20dog".to_string()]
    );
}

#[test]
fn test_blank_search_alerts() {
    let controller = PageController::new(RecordingHost::at("/students"), PageConfig::default());

    assert_eq!(controller.perform_search("  ").unwrap(), SearchOutcome::EmptyQuery);
    assert_eq!(
        *controller.host().alerts.borrow(),
        vec!["Please enter a search term".to_string()]
    );
    assert!(controller.host().navigations.borrow().is_empty());
}

#[test]
fn test_declined_delete_in_post_form_cancels_default_action() {
    let controller = PageController::new(RecordingHost::default(), PageConfig::default());

    assert_eq!(controller.confirm_delete(Some("POST")), DeleteDecision::Cancel);
    assert_eq!(
        *controller.host().confirms.borrow(),
        vec!["Are you sure you want to delete this record? This action cannot be undone.".to_string()]
    );

    // GET forms and stray buttons never prompt
    assert_eq!(controller.confirm_delete(Some("get")), DeleteDecision::Proceed);
    assert_eq!(controller.confirm_delete(None), DeleteDecision::Proceed);
    assert_eq!(controller.host().confirms.borrow().len(), 1);
}

#[test]
fn test_csv_export_quotes_and_reparses() {
    let controller = PageController::new(RecordingHost::default(), PageConfig::default());
    let rows = vec![
        vec!["Name".to_string(), "Note".to_string()],
        vec!["Ana".to_string(), "said \"hi\"".to_string()],
        vec!["Ben".to_string(), "a, b".to_string()],
    ];

    controller.export_table(Some(rows.as_slice()), None).unwrap();

    let downloads = controller.host().downloads.borrow();
    let download = &downloads[0];
    assert_eq!(download.filename, "export.csv");
    assert_eq!(download.mime_type, "text/csv");
    assert_eq!(
        download.body,
        "\"Name\",\"Note\"\n\"Ana\",\"said \"\"hi\"\"\"\n\"Ben\",\"a, b\""
    );

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(download.body.as_bytes());
    let parsed: Vec<Vec<String>> = reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect();
    assert_eq!(parsed, rows);
}

#[test]
fn test_missing_table_alerts_for_export_and_print() {
    let controller = PageController::new(RecordingHost::default(), PageConfig::default());

    controller.export_table(None, Some("students.csv")).unwrap();
    controller.print_table(None).unwrap();

    assert_eq!(
        *controller.host().alerts.borrow(),
        vec![
            "No table found to export".to_string(),
            "No table found to print".to_string()
        ]
    );
    assert!(controller.host().downloads.borrow().is_empty());
    assert!(controller.host().printed.borrow().is_empty());
}

#[test]
fn test_print_table_uses_configured_delay() {
    let mut config = PageConfig::default();
    config.timings.print_delay_ms = 100;
    let controller = PageController::new(RecordingHost::default(), config);

    controller
        .print_table(Some("<table class=\"table\"><tr><td>1</td></tr></table>"))
        .unwrap();

    let printed = controller.host().printed.borrow();
    assert_eq!(printed.len(), 1);
    assert!(printed[0].0.contains("<title>Print Table</title>"));
    assert!(printed[0].0.contains("<td>1</td>"));
    assert_eq!(printed[0].1, 100);
}

#[test]
fn test_sort_orders_numeric_and_lexicographic() {
    let keys: Vec<String> = ["10", "2", "1"].iter().map(|s| s.to_string()).collect();

    let numeric: Vec<&str> = sort_order(&keys, SortMode::Numeric, compare_text)
        .into_iter()
        .map(|i| keys[i].as_str())
        .collect();
    assert_eq!(numeric, vec!["1", "2", "10"]);

    let lexicographic: Vec<&str> = sort_order(&keys, SortMode::Lexicographic, compare_text)
        .into_iter()
        .map(|i| keys[i].as_str())
        .collect();
    assert_eq!(lexicographic, vec!["1", "10", "2"]);
}

#[test]
fn test_numeric_sort_puts_text_first_in_row_order() {
    let keys: Vec<String> = ["7", "n/a", "3", "pending", "-1"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let order = sort_order(&keys, SortMode::Numeric, compare_text);

    assert_eq!(order, vec![1, 3, 4, 2, 0]);
}

#[test]
fn test_page_kind_resolution() {
    let controller = PageController::new(RecordingHost::at("/login/student"), PageConfig::default());
    assert_eq!(controller.resolve_page(None), PageKind::Login);
    assert_eq!(controller.resolve_page(Some("dashboard")), PageKind::Dashboard);

    let controller = PageController::new(RecordingHost::at("/reports"), PageConfig::default());
    assert_eq!(controller.resolve_page(None), PageKind::Generic);
}

#[test]
fn test_modal_confirm_invokes_callback_exactly_once() {
    let calls = Rc::new(RefCell::new(0));
    let mut state = ModalState::default();

    for action in [ModalAction::Confirm, ModalAction::Confirm, ModalAction::Backdrop] {
        if state.resolve(action) == Some(true) {
            *calls.borrow_mut() += 1;
        }
    }
    assert_eq!(*calls.borrow(), 1);

    for action in [ModalAction::Cancel, ModalAction::Backdrop] {
        let mut state = ModalState::default();
        assert_eq!(state.resolve(action), Some(false));
        assert!(state.is_closed());
    }
}

struct Binding {
    detached: Rc<RefCell<usize>>,
}

impl Detach for Binding {
    fn detach(&mut self) {
        *self.detached.borrow_mut() += 1;
    }
}

#[test]
fn test_rewiring_requires_teardown() {
    let detached = Rc::new(RefCell::new(0));
    let mut registry = ListenerRegistry::new();

    assert!(registry.begin(Phase::Ready));
    registry.track(Binding { detached: detached.clone() });
    registry.track(Binding { detached: detached.clone() });
    assert!(!registry.begin(Phase::Ready));
    assert!(registry.begin(Phase::Load));
    registry.track(Binding { detached: detached.clone() });

    assert_eq!(registry.detach_all(), 3);
    assert_eq!(*detached.borrow(), 3);
    assert!(registry.is_empty());
    assert!(registry.begin(Phase::Ready));
}
