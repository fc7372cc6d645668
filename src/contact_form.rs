//! State machine for the contact form: five text fields plus the lifecycle
//! of a single submission attempt. Kept free of web dependencies so the
//! transitions are testable on the native host.

/// How long a success/error banner stays up before the form returns to idle.
pub const STATUS_RESET_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

/// Lifecycle of a single submission attempt. `Submitting` is a real state
/// rather than a flag beside the status so "at most one in-flight
/// submission" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub fields: FormFields,
    pub status: SubmitStatus,
}

/// Transitions dispatched by the contact section.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    Begin,
    Completed,
    Failed,
    ResetStatus,
}

impl ContactForm {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Phone => self.fields.phone = value,
            Field::Service => self.fields.service = value,
            Field::Message => self.fields.message = value,
        }
    }

    /// Starts a submission and returns a snapshot of the fields to send,
    /// or `None` if one is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormFields> {
        if self.status == SubmitStatus::Submitting {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.fields.clone())
    }

    /// The in-flight submission resolved; the form empties for the next one.
    pub fn complete(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Success;
            self.fields = FormFields::default();
        }
    }

    /// The in-flight submission failed; fields stay as entered so the user
    /// can retry.
    pub fn fail(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Error;
        }
    }

    /// Timed return to idle after a success/error banner. A no-op in the
    /// other states, so a stale timer firing mid-submission does nothing.
    pub fn reset_status(&mut self) {
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.set_field(field, value),
            FormAction::Begin => {
                let _ = self.begin_submit();
            }
            FormAction::Completed => self.complete(),
            FormAction::Failed => self.fail(),
            FormAction::ResetStatus => self.reset_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Jane Doe".into());
        form.set_field(Field::Email, "jane@example.com".into());
        form.set_field(Field::Phone, "".into());
        form.set_field(Field::Service, "Wedding Photography".into());
        form.set_field(Field::Message, "Need a quote".into());
        form
    }

    #[test]
    fn field_edits_are_last_write_wins() {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Jane".into());
        form.set_field(Field::Name, "Jane Doe".into());
        assert_eq!(form.fields.name, "Jane Doe");
    }

    #[test]
    fn at_most_one_submission_in_flight() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn successful_submission_empties_every_field() {
        let mut form = filled();
        form.begin_submit();
        form.complete();
        assert_eq!(form.status, SubmitStatus::Success);
        assert_eq!(form.fields, FormFields::default());
    }

    #[test]
    fn failed_submission_preserves_what_the_user_entered() {
        let mut form = filled();
        let entered = form.fields.clone();
        form.begin_submit();
        form.fail();
        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.fields, entered);
    }

    #[test]
    fn banner_states_revert_to_idle() {
        let mut form = filled();
        form.begin_submit();
        form.complete();
        form.reset_status();
        assert_eq!(form.status, SubmitStatus::Idle);

        let mut form = filled();
        form.begin_submit();
        form.fail();
        form.reset_status();
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn stale_reset_timer_cannot_disturb_a_new_submission() {
        let mut form = filled();
        form.begin_submit();
        form.reset_status();
        assert_eq!(form.status, SubmitStatus::Submitting);

        let mut idle = ContactForm::default();
        idle.reset_status();
        assert_eq!(idle.status, SubmitStatus::Idle);
    }

    #[test]
    fn resolving_outside_a_submission_is_ignored() {
        let mut form = filled();
        form.complete();
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.fields, filled().fields);

        form.fail();
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn quote_request_walks_idle_submitting_success() {
        let mut form = filled();
        assert_eq!(form.status, SubmitStatus::Idle);

        let snapshot = form.begin_submit().expect("no submission in flight");
        assert_eq!(form.status, SubmitStatus::Submitting);
        assert_eq!(snapshot.name, "Jane Doe");
        assert_eq!(snapshot.email, "jane@example.com");
        assert_eq!(snapshot.phone, "");
        assert_eq!(snapshot.service, "Wedding Photography");
        assert_eq!(snapshot.message, "Need a quote");

        form.complete();
        assert_eq!(form.status, SubmitStatus::Success);
        assert!(form.fields.name.is_empty());
        assert!(form.fields.email.is_empty());
        assert!(form.fields.phone.is_empty());
        assert!(form.fields.service.is_empty());
        assert!(form.fields.message.is_empty());
    }

    #[test]
    fn actions_drive_the_same_transitions() {
        let mut form = filled();
        form.apply(FormAction::Begin);
        assert_eq!(form.status, SubmitStatus::Submitting);
        form.apply(FormAction::Failed);
        assert_eq!(form.status, SubmitStatus::Error);
        form.apply(FormAction::ResetStatus);
        assert_eq!(form.status, SubmitStatus::Idle);
        form.apply(FormAction::Edit(Field::Message, "Updated quote".into()));
        assert_eq!(form.fields.message, "Updated quote");
    }
}
