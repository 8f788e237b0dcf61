use coach_core::model::{ActionPlan, TaskId};

use super::test_harness::{ViewKind, drive_dom, sample_analysis, setup_view_harness, setup_view_harness_with};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_reveal_sections() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("animate-on-scroll"), "missing reveal hook in {html}");
    assert!(
        html.contains(r##"href="#how-it-works""##),
        "missing anchor link in {html}"
    );
    assert!(html.contains("Analyze your fit"), "missing cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Upload);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("textarea"), "missing textarea in {html}");
    assert!(html.contains("job-description"), "missing textarea id in {html}");
    assert!(html.contains("16 MB"), "missing upload limit in {html}");
    assert!(!html.contains("btn-loading"), "button must start unlocked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_submit_without_description_raises_error_toast() {
    let mut harness = setup_view_harness(ViewKind::Upload);
    harness.rebuild();
    let handles = harness.upload_handles.clone().expect("upload handles");

    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("notification notification-error"),
        "missing error toast in {html}"
    );
    assert!(html.contains("Please provide a job description."));
    assert!(!html.contains("btn-loading"), "button must stay unlocked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_submit_with_description_locks_button() {
    let mut harness = setup_view_harness(ViewKind::Upload);
    harness.rebuild();
    let handles = harness.upload_handles.clone().expect("upload handles");

    let mut description = handles.job_description();
    description.set("Senior Rust engineer, remote".to_string());
    drive_dom(&mut harness.dom);

    handles.submit().call(());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("btn-loading"), "missing loading class in {html}");
    assert!(html.contains("disabled"), "missing disabled lock in {html}");
    assert!(
        html.contains("notification notification-success"),
        "missing success toast in {html}"
    );

    // Repeated submits against a locked form neither stack toasts nor throw.
    handles.submit().call(());
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert_eq!(html.matches("notification notification-success").count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn plan_view_smoke_renders_initial_progress() {
    let mut harness = setup_view_harness(ViewKind::Plan);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0/3 tasks completed"), "missing label in {html}");
    assert!(html.contains("width: 0%;"), "missing bar width in {html}");
    assert!(html.contains(r#"data-task-id="1""#), "missing task row in {html}");
    assert!(!html.contains("task-complete"), "no task should start completed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn plan_marking_a_task_updates_progress() {
    let mut harness = setup_view_harness(ViewKind::Plan);
    harness.rebuild();
    let handles = harness.plan_handles.clone().expect("plan handles");

    handles.mark_complete().call(TaskId::new(2));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("1/3 tasks completed"), "missing label in {html}");
    assert!(html.contains("width: 33.33%;"), "missing bar width in {html}");
    assert!(
        html.contains(r#"aria-valuenow="33.33""#),
        "missing aria value in {html}"
    );
    assert!(html.contains("task-complete"), "missing row class in {html}");
    assert_eq!(html.matches("task-complete").count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn plan_marking_unknown_task_is_a_no_op() {
    let mut harness = setup_view_harness(ViewKind::Plan);
    harness.rebuild();
    let handles = harness.plan_handles.clone().expect("plan handles");

    handles.mark_complete().call(TaskId::new(99));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("0/3 tasks completed"), "progress must not move in {html}");
    assert!(!html.contains("task-complete"));
}

#[tokio::test(flavor = "current_thread")]
async fn plan_completing_every_task_raises_one_success_toast() {
    let mut harness = setup_view_harness(ViewKind::Plan);
    harness.rebuild();
    let handles = harness.plan_handles.clone().expect("plan handles");

    for id in [1, 2, 3] {
        handles.mark_complete().call(TaskId::new(id));
        drive_dom(&mut harness.dom);
    }

    let html = harness.render();
    assert!(html.contains("3/3 tasks completed"), "missing label in {html}");
    assert!(html.contains("width: 100%;"), "missing full bar in {html}");
    assert_eq!(html.matches("notification notification-success").count(), 1);

    let vm = handles.vm();
    assert!(vm.read().progress().is_complete());
}

#[tokio::test(flavor = "current_thread")]
async fn plan_with_no_tasks_renders_the_pinned_zero_case() {
    let mut harness =
        setup_view_harness_with(ViewKind::Plan, ActionPlan::empty(), sample_analysis());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0/0 tasks completed"), "missing label in {html}");
    assert!(html.contains("width: 0%;"), "missing bar width in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_view_smoke_renders_target_widths() {
    let mut harness = setup_view_harness(ViewKind::Analysis);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(r#"data-width="58%""#), "missing readiness bar in {html}");
    assert!(html.contains(r#"aria-valuenow="58""#), "missing aria value in {html}");
    assert!(html.contains(r#"data-width="45%""#), "missing Python bar in {html}");
    assert!(html.contains(r#"data-width="70%""#), "missing JavaScript bar in {html}");
    assert!(html.contains(r#"data-width="35%""#), "missing React bar in {html}");
    assert!(html.contains("skill-bar"), "missing skill bars in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn mobile_menu_toggles_hidden_class() {
    let mut harness = setup_view_harness(ViewKind::Header);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("mobile-menu hidden"), "menu must start hidden in {html}");

    let handles = harness.header_handles.clone().expect("header handles");
    handles.toggle().call(());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(!html.contains("mobile-menu hidden"), "menu must open in {html}");
    assert!(html.contains(r#"class="mobile-menu""#), "menu element must stay in {html}");
    let menu_hidden = handles.menu_hidden();
    assert!(!menu_hidden());

    handles.toggle().call(());
    drive_dom(&mut harness.dom);
    assert!(harness.render().contains("mobile-menu hidden"));
}
