use std::cell::RefCell;
use std::rc::Rc;

use vitrine_blocks::ShippingCountdownTimerContent;
use vitrine_test_support::fixtures::{category, init_test_tracing, shipping_timer_block, text_block};
use vitrine_ui::site_configuration::fonts::INDUSTRY_STYLESHEET_URL;
use vitrine_ui::{
    DocumentHeadWriter, DrawerState, DrawerView, MemoryHeadWriter, NoopHeadWriter, Placement,
    RuntimeConfig, SettingsType, SiteConfiguration, StylesheetOutcome,
};

const ROBOTO_URL: &str =
    "https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&display=swap";

fn editor() -> SiteConfiguration<MemoryHeadWriter> {
    init_test_tracing();
    SiteConfiguration::new(MemoryHeadWriter::default(), &RuntimeConfig::default())
}

#[test]
fn loading_the_same_font_twice_adds_one_link() {
    let mut config = editor();
    config.load_font("Roboto");
    config.load_font("  Roboto ");
    assert_eq!(config.head().count(ROBOTO_URL), 1);
    assert_eq!(config.current_font(), "font-family: 'Roboto', sans-serif");
}

#[test]
fn industry_spellings_converge() {
    let mut fonts = Vec::new();
    for spelling in ["Industry", "industry", "INDUSTRY"] {
        let mut config = editor();
        config.load_font(spelling);
        fonts.push((config.current_font().to_string(), config.head().stylesheets()));
    }
    assert!(fonts.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(fonts[0].0, "font-family: 'industry', sans-serif");
    assert_eq!(fonts[0].1, vec![INDUSTRY_STYLESHEET_URL]);
}

#[test]
fn font_names_keep_their_case() {
    let mut config = editor();
    config.load_font("Open Sans");
    assert!(config.current_font().contains("Open Sans"));
    assert_eq!(
        config.head().stylesheets(),
        vec!["https://fonts.googleapis.com/css2?family=Open%20Sans:wght@400;700&display=swap"]
    );
}

#[test]
fn shared_head_survives_across_sessions() {
    init_test_tracing();
    let head = Rc::new(MemoryHeadWriter::default());
    let mut first = SiteConfiguration::new(Rc::clone(&head), &RuntimeConfig::with_font("industry"));
    first.load_font("Roboto");
    let second = SiteConfiguration::new(Rc::clone(&head), &RuntimeConfig::with_font("INDUSTRY"));
    assert_eq!(second.current_font(), "font-family: 'industry', sans-serif");
    assert_eq!(head.stylesheets(), vec![INDUSTRY_STYLESHEET_URL, ROBOTO_URL]);
}

#[test]
fn headless_sessions_still_track_the_font() {
    init_test_tracing();
    let mut config = SiteConfiguration::new(NoopHeadWriter, &RuntimeConfig::with_font("industry"));
    assert_eq!(config.current_font(), "font-family: 'industry', sans-serif");
    config.load_font("Roboto");
    assert_eq!(config.current_font(), "font-family: 'Roboto', sans-serif");
    assert_eq!(
        config.head().ensure_stylesheet(ROBOTO_URL).ok(),
        Some(StylesheetOutcome::Skipped)
    );
}

#[test]
fn editing_flow_moves_the_drawer() {
    let mut config = editor();
    let timer = shipping_timer_block("timer-1");

    config.open_drawer_with_view(DrawerView::BlocksSettings, Some(&timer));
    assert_eq!(config.placement(), Placement::Right);
    assert_eq!(config.block_uuid(), "timer-1");

    config.open_drawer_with_view(DrawerView::PageSettings, Some(&text_block("text-1")));
    assert_eq!(config.placement(), Placement::Left);
    assert_eq!(config.block_type(), "TextCard");

    config.set_active_setting("foo");
    assert_eq!(config.drawer_state(), DrawerState::OpenWithSetting("foo".into()));
    assert_eq!(config.drawer_view(), None);
    assert_eq!(config.placement(), Placement::Left);

    config.close_drawer();
    assert_eq!(config.drawer_state(), DrawerState::Closed);
    assert_eq!(config.active_setting(), "");
    assert_eq!(config.drawer_view(), None);
}

#[test]
fn close_drawer_always_resets_visibility() {
    let sequences: [&[&str]; 3] = [
        &["view:blocksSettings"],
        &["setting:design", "view:blocksList"],
        &["view:pageSettings", "setting:seo", "setting:legal"],
    ];
    for steps in sequences {
        let mut config = editor();
        for step in steps {
            match step.split_once(':') {
                Some(("view", id)) => {
                    let view = DrawerView::from_id(id).expect("known view");
                    config.open_drawer_with_view(view, None);
                }
                Some(("setting", name)) => config.set_active_setting(name),
                _ => unreachable!("malformed step {step}"),
            }
        }
        config.close_drawer();
        assert!(!config.drawer_open());
        assert_eq!(config.drawer_view(), None);
        assert_eq!(config.active_setting(), "");
    }
}

#[test]
fn listeners_track_block_edits() {
    let mut config = editor();
    let edited = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&edited);
    config.subscribe(move |state| log.borrow_mut().push(state.block_uuid.clone()));

    let timer = shipping_timer_block("timer-2");
    config.set_blocks(vec![timer.clone()]);
    config.open_drawer_with_view(DrawerView::BlocksSettings, Some(&timer));
    config.set_settings_category(Some(category(3)), Some(SettingsType::General));

    assert_eq!(*edited.borrow(), vec!["", "timer-2", "timer-2"]);

    let content = ShippingCountdownTimerContent::from_block(&config.blocks()[0]).expect("timer");
    assert!(content.resolve().workdays.saturday);
}
