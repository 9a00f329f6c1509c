/// Form state of the login view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginState {
    /// Disables the form and clears the previous error.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    pub fn finish(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_reenables_form_with_message() {
        let mut state = LoginState {
            error: Some("previous".into()),
            ..Default::default()
        };
        state.begin_submit();
        assert!(state.submitting);
        assert_eq!(state.error, None);

        state.fail("Invalid email or password".into());
        assert!(!state.submitting);
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
    }
}
