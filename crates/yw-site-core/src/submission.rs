//! Simulated contact-form submission.
//!
//! There is no request: the flow disables the submit control, waits, restores
//! it, announces success and clears the form.

use crate::config::SiteConfig;
use crate::timer::Delay;
use tracing::debug;

/// The form as seen by the submission flow.
pub trait SubmitHost {
    /// Current label of the submit control.
    fn submit_label(&self) -> String;
    fn set_busy(&self, busy: bool, label: &str);
    fn play_feedback(&self);
    fn announce_success(&self, message: &str);
    fn reset_fields(&self);
}

/// Whether a form control submits its form: a `<button>` with no type or
/// `type="submit"`, or an `<input type="submit">`. Tag and type are
/// compared case-insensitively.
pub fn is_submit_control(tag: &str, type_attr: Option<&str>) -> bool {
    let kind = type_attr.map(str::trim);
    if tag.eq_ignore_ascii_case("button") {
        return match kind {
            None | Some("") => true,
            Some(t) => t.eq_ignore_ascii_case("submit"),
        };
    }
    tag.eq_ignore_ascii_case("input") && kind.is_some_and(|t| t.eq_ignore_ascii_case("submit"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPlan {
    pub loading_label: String,
    pub success_message: String,
    pub delay_ms: u32,
    pub feedback: bool,
}

impl From<&SiteConfig> for SubmissionPlan {
    fn from(cfg: &SiteConfig) -> Self {
        Self {
            loading_label: cfg.copy.loading_label.clone(),
            success_message: cfg.copy.submit_success.clone(),
            delay_ms: cfg.timings.submit_delay_ms,
            feedback: cfg.behaviour.coin_on_submit,
        }
    }
}

/// Guards against overlapping simulations (e.g. Enter pressed twice).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionGate {
    in_flight: bool,
}

impl SubmissionGate {
    /// Returns false when a simulation is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

/// disable → wait → re-enable → notify → reset.
pub async fn simulate_submission<H: SubmitHost, D: Delay>(host: &H, delay: &D, plan: &SubmissionPlan) {
    let original_label = host.submit_label();
    host.set_busy(true, &plan.loading_label);
    if plan.feedback {
        host.play_feedback();
    }

    debug!("simulating submission for {}ms", plan.delay_ms);
    delay.delay(plan.delay_ms).await;

    host.set_busy(false, &original_label);
    host.announce_success(&plan.success_message);
    host.reset_fields();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteVariant;
    use crate::timer::testing::RecordingDelay;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Step {
        Busy(bool, String),
        Feedback,
        Success(String),
        Reset,
    }

    struct FakeForm {
        label: RefCell<String>,
        disabled: RefCell<bool>,
        fields: RefCell<Vec<String>>,
        steps: RefCell<Vec<Step>>,
    }

    impl FakeForm {
        fn filled() -> Self {
            Self {
                label: RefCell::new("🎮 FIRE AWAY 🎮".into()),
                disabled: RefCell::new(false),
                fields: RefCell::new(vec!["Toad".into(), "toad@castle.mk".into(), "hello".into()]),
                steps: RefCell::new(Vec::new()),
            }
        }
    }

    impl SubmitHost for FakeForm {
        fn submit_label(&self) -> String {
            self.label.borrow().clone()
        }

        fn set_busy(&self, busy: bool, label: &str) {
            *self.disabled.borrow_mut() = busy;
            *self.label.borrow_mut() = label.to_string();
            self.steps.borrow_mut().push(Step::Busy(busy, label.to_string()));
        }

        fn play_feedback(&self) {
            self.steps.borrow_mut().push(Step::Feedback);
        }

        fn announce_success(&self, message: &str) {
            self.steps.borrow_mut().push(Step::Success(message.to_string()));
        }

        fn reset_fields(&self) {
            self.fields.borrow_mut().iter_mut().for_each(String::clear);
            self.steps.borrow_mut().push(Step::Reset);
        }
    }

    #[tokio::test]
    async fn full_cycle_restores_label_and_clears_fields() {
        let cfg = SiteConfig::for_variant(SiteVariant::Adventure);
        let plan = SubmissionPlan::from(&cfg);
        let form = FakeForm::filled();
        let delay = RecordingDelay::default();

        simulate_submission(&form, &delay, &plan).await;

        assert_eq!(
            *form.steps.borrow(),
            vec![
                Step::Busy(true, "⏳ LOADING... ⏳".into()),
                Step::Feedback,
                Step::Busy(false, "🎮 FIRE AWAY 🎮".into()),
                Step::Success(cfg.copy.submit_success.clone()),
                Step::Reset,
            ]
        );
        assert_eq!(*delay.requested.borrow(), vec![2_000]);
        assert!(!*form.disabled.borrow());
        assert_eq!(form.label.borrow().as_str(), "🎮 FIRE AWAY 🎮");
        assert!(form.fields.borrow().iter().all(String::is_empty));
    }

    #[tokio::test]
    async fn quiet_variant_skips_feedback() {
        let plan = SubmissionPlan::from(&SiteConfig::for_variant(SiteVariant::Classic));
        let form = FakeForm::filled();

        simulate_submission(&form, &RecordingDelay::default(), &plan).await;

        assert!(!form.steps.borrow().contains(&Step::Feedback));
        assert_eq!(form.steps.borrow()[0], Step::Busy(true, "Sending...".into()));
    }

    #[test]
    fn gate_rejects_overlap() {
        let mut gate = SubmissionGate::default();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        gate.finish();
        assert!(!gate.in_flight());
        assert!(gate.try_begin());
    }

    #[test]
    fn submit_control_detection() {
        assert!(is_submit_control("BUTTON", None));
        assert!(is_submit_control("button", Some("")));
        assert!(is_submit_control("button", Some("Submit")));
        assert!(is_submit_control("INPUT", Some("submit")));
        assert!(!is_submit_control("button", Some("button")));
        assert!(!is_submit_control("button", Some("reset")));
        assert!(!is_submit_control("input", None));
        assert!(!is_submit_control("input", Some("email")));
    }
}
