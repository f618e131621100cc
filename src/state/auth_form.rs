//! Login / register / password-recovery form.
//!
//! The mode is a tagged enum so "recovery email sent" can only exist while
//! in recovery. Submitting never talks to a backend: a valid login or
//! registration redirects to the dashboard, a valid recovery request only
//! flips the `sent` flag.

use dioxus::logger::tracing::{debug, info};
use thiserror::Error;

use crate::route::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
    Recovery { sent: bool },
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Entrar",
            AuthMode::Register => "Criar Conta",
            AuthMode::Recovery { .. } => "Recuperar Senha",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AuthMode::Login => "Acesse sua conta para continuar",
            AuthMode::Register => "Crie sua conta para começar a apostar",
            AuthMode::Recovery { .. } => "Informe seu email para recuperar sua senha",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Entrar",
            AuthMode::Register => "Criar Conta",
            AuthMode::Recovery { .. } => "Enviar link de recuperação",
        }
    }

    /// Stable key for the form element so each mode remounts its animation.
    pub fn key(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
            AuthMode::Recovery { .. } => "recovery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    ShowRegister,
    ShowRecovery,
    BackToLogin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,
    #[error("As senhas não coincidem.")]
    PasswordMismatch,
    #[error("Por favor, informe seu email.")]
    MissingEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Redirect(&'static str),
    RecoverySent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub show_password: bool,
    pub error: Option<ValidationError>,
}

impl Default for AuthForm {
    fn default() -> Self {
        AuthForm::new(AuthMode::Login)
    }
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        AuthForm {
            mode,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            full_name: String::new(),
            show_password: false,
            error: None,
        }
    }

    /// Applies a mode change. Returns false when the action makes no sense
    /// from the current mode; the form is left untouched in that case.
    pub fn apply(&mut self, action: AuthAction) -> bool {
        let next = match (self.mode, action) {
            (AuthMode::Login, AuthAction::ShowRegister) => AuthMode::Register,
            (AuthMode::Login, AuthAction::ShowRecovery) => AuthMode::Recovery { sent: false },
            (AuthMode::Register | AuthMode::Recovery { .. }, AuthAction::BackToLogin) => {
                AuthMode::Login
            }
            (mode, action) => {
                debug!("[auth] ignoring {:?} in {:?}", action, mode);
                return false;
            }
        };
        debug!("[auth] {:?} -> {:?}", self.mode, next);
        self.mode = next;
        self.error = None;
        true
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn recovery_sent(&self) -> bool {
        matches!(self.mode, AuthMode::Recovery { sent: true })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self.mode {
            AuthMode::Login => {
                if self.email.is_empty() || self.password.is_empty() {
                    return Err(ValidationError::MissingFields);
                }
            }
            AuthMode::Register => {
                // mismatch wins over missing fields
                if self.password != self.confirm_password {
                    return Err(ValidationError::PasswordMismatch);
                }
                if self.full_name.is_empty()
                    || self.email.is_empty()
                    || self.password.is_empty()
                    || self.confirm_password.is_empty()
                {
                    return Err(ValidationError::MissingFields);
                }
            }
            AuthMode::Recovery { .. } => {
                if self.email.is_empty() {
                    return Err(ValidationError::MissingEmail);
                }
            }
        }
        Ok(())
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.error = None;
        if let Err(e) = self.validate() {
            info!("[auth] {} rejected: {:?}", self.mode.key(), e);
            self.error = Some(e);
            return SubmitOutcome::Rejected;
        }
        match self.mode {
            AuthMode::Login | AuthMode::Register => {
                info!("[auth] {} accepted", self.mode.key());
                SubmitOutcome::Redirect(paths::DASHBOARD)
            }
            AuthMode::Recovery { .. } => {
                info!("[auth] recovery link requested");
                self.mode = AuthMode::Recovery { sent: true };
                SubmitOutcome::RecoverySent
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(mode: AuthMode) -> AuthForm {
        AuthForm::new(mode)
    }

    #[test]
    fn starts_in_login() {
        let f = AuthForm::default();
        assert_eq!(f.mode, AuthMode::Login);
        assert_eq!(f.error, None);
        assert!(!f.show_password);
    }

    #[test]
    fn login_requires_email_and_password() {
        let mut f = form(AuthMode::Login);
        f.email = "a@b.com".into();
        assert_eq!(f.submit(), SubmitOutcome::Rejected);
        assert_eq!(f.error, Some(ValidationError::MissingFields));

        let mut f = form(AuthMode::Login);
        f.password = "x".into();
        assert_eq!(f.submit(), SubmitOutcome::Rejected);
        assert_eq!(f.error, Some(ValidationError::MissingFields));
    }

    #[test]
    fn login_with_both_fields_redirects() {
        let mut f = form(AuthMode::Login);
        f.email = "a@b.com".into();
        f.password = "whatever".into();
        assert_eq!(f.submit(), SubmitOutcome::Redirect("/dashboard"));
        assert_eq!(f.error, None);
    }

    #[test]
    fn resubmit_clears_previous_error() {
        let mut f = form(AuthMode::Login);
        f.submit();
        assert!(f.error.is_some());
        f.email = "a@b.com".into();
        f.password = "p".into();
        f.submit();
        assert_eq!(f.error, None);
    }

    #[test]
    fn register_scenario_redirects() {
        let mut f = form(AuthMode::Register);
        f.full_name = "Ana".into();
        f.email = "ana@x.com".into();
        f.password = "abc123".into();
        f.confirm_password = "abc123".into();
        assert_eq!(f.submit(), SubmitOutcome::Redirect("/dashboard"));
        assert_eq!(f.error, None);
    }

    #[test]
    fn register_mismatch_regardless_of_other_fields() {
        let mut f = form(AuthMode::Register);
        f.password = "abc".into();
        f.confirm_password = "abd".into();
        assert_eq!(f.submit(), SubmitOutcome::Rejected);
        assert_eq!(f.error, Some(ValidationError::PasswordMismatch));

        f.full_name = "Ana".into();
        f.email = "ana@x.com".into();
        f.submit();
        assert_eq!(f.error, Some(ValidationError::PasswordMismatch));
    }

    #[test]
    fn register_missing_name_is_missing_fields() {
        let mut f = form(AuthMode::Register);
        f.email = "ana@x.com".into();
        f.password = "abc".into();
        f.confirm_password = "abc".into();
        assert_eq!(f.submit(), SubmitOutcome::Rejected);
        assert_eq!(f.error, Some(ValidationError::MissingFields));
    }

    #[test]
    fn recovery_scenario_with_empty_email() {
        let mut f = form(AuthMode::Recovery { sent: false });
        assert_eq!(f.submit(), SubmitOutcome::Rejected);
        assert_eq!(
            f.error.map(|e| e.to_string()).as_deref(),
            Some("Por favor, informe seu email.")
        );
        assert!(!f.recovery_sent());
    }

    #[test]
    fn recovery_with_email_sets_sent_without_redirect() {
        let mut f = form(AuthMode::Recovery { sent: false });
        f.email = "ana@x.com".into();
        assert_eq!(f.submit(), SubmitOutcome::RecoverySent);
        assert!(f.recovery_sent());
        assert_eq!(f.error, None);
    }

    #[test]
    fn transitions_clear_error() {
        let cases = [
            (AuthMode::Login, AuthAction::ShowRegister, AuthMode::Register),
            (
                AuthMode::Login,
                AuthAction::ShowRecovery,
                AuthMode::Recovery { sent: false },
            ),
            (AuthMode::Register, AuthAction::BackToLogin, AuthMode::Login),
            (
                AuthMode::Recovery { sent: false },
                AuthAction::BackToLogin,
                AuthMode::Login,
            ),
            (
                AuthMode::Recovery { sent: true },
                AuthAction::BackToLogin,
                AuthMode::Login,
            ),
        ];
        for (from, action, to) in cases {
            let mut f = form(from);
            f.error = Some(ValidationError::MissingFields);
            assert!(f.apply(action));
            assert_eq!(f.mode, to);
            assert_eq!(f.error, None);
        }
    }

    #[test]
    fn back_to_login_drops_sent_flag() {
        let mut f = form(AuthMode::Recovery { sent: true });
        f.apply(AuthAction::BackToLogin);
        f.apply(AuthAction::ShowRecovery);
        assert_eq!(f.mode, AuthMode::Recovery { sent: false });
    }

    #[test]
    fn invalid_actions_are_ignored() {
        let mut f = form(AuthMode::Register);
        f.error = Some(ValidationError::PasswordMismatch);
        assert!(!f.apply(AuthAction::ShowRecovery));
        assert_eq!(f.mode, AuthMode::Register);
        assert_eq!(f.error, Some(ValidationError::PasswordMismatch));

        let mut f = form(AuthMode::Login);
        assert!(!f.apply(AuthAction::BackToLogin));
        assert_eq!(f.mode, AuthMode::Login);
    }

    #[test]
    fn fields_survive_mode_changes() {
        let mut f = form(AuthMode::Login);
        f.email = "ana@x.com".into();
        f.apply(AuthAction::ShowRegister);
        assert_eq!(f.email, "ana@x.com");
    }

    #[test]
    fn password_visibility_is_independent_of_mode() {
        let mut f = form(AuthMode::Login);
        f.toggle_password_visibility();
        assert_eq!(f.input_type(), "text");
        f.apply(AuthAction::ShowRegister);
        assert_eq!(f.input_type(), "text");
        f.toggle_password_visibility();
        assert_eq!(f.input_type(), "password");
    }
}
