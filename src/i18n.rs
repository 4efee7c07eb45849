//! User-facing message catalogs. Every string a controller shows goes through
//! a [`Messages`] table so the CLI can switch languages with `--locale`.

use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    #[must_use]
    pub const fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Ko => &KO,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::En),
            "ko" | "ko-kr" | "korean" => Ok(Locale::Ko),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub required_email: &'static str,
    pub required_password: &'static str,
    pub required_confirm_password: &'static str,
    pub required_username: &'static str,
    pub required_address: &'static str,
    pub invalid_email: &'static str,
    pub password_too_short: &'static str,
    pub password_mismatch: &'static str,
    pub empty_duplicate_value: &'static str,
    pub duplicate_check_failed: &'static str,
    pub taken_fallback: &'static str,
    pub signup_failed: &'static str,
    pub checking: &'static str,
    pub find_id_registered: &'static str,
    pub find_id_not_registered: &'static str,
    pub email_available: &'static str,
    pub username_available: &'static str,
    pub unchecked_email: &'static str,
    pub unchecked_username: &'static str,
    pub submitting: &'static str,
    pub signup_complete: &'static str,
    pub needs_verification: &'static str,
    pub redirecting: &'static str,
    pub find_id_title: &'static str,
    pub find_id_button: &'static str,
    pub signup_title: &'static str,
    pub signup_button: &'static str,
    pub disabled: &'static str,
    pub label_email: &'static str,
    pub label_username: &'static str,
    pub label_password: &'static str,
    pub label_confirm_password: &'static str,
    pub label_address: &'static str,
    pub label_detail_address: &'static str,
    pub label_phone: &'static str,
}

static EN: Messages = Messages {
    required_email: "Email is required.",
    required_password: "Password is required.",
    required_confirm_password: "Please confirm your password.",
    required_username: "Username is required.",
    required_address: "Address is required.",
    invalid_email: "Email address looks invalid.",
    password_too_short: "Password must be at least 8 characters.",
    password_mismatch: "Passwords do not match.",
    empty_duplicate_value: "Please enter a value to check.",
    duplicate_check_failed: "Duplicate check failed. Please try again.",
    taken_fallback: "Already in use.",
    signup_failed: "Signup failed. Please try again.",
    checking: "Checking...",
    find_id_registered: "This email is already registered.",
    find_id_not_registered: "This email is not registered.",
    email_available: "This email is available.",
    username_available: "This username is available.",
    unchecked_email: "Please check the email for duplicates first.",
    unchecked_username: "Please check the username for duplicates first.",
    submitting: "Creating your account...",
    signup_complete: "Your account has been created.",
    needs_verification: "Check your email to verify your account before signing in.",
    redirecting: "You will be redirected shortly.",
    find_id_title: "Find ID",
    find_id_button: "Find ID",
    signup_title: "Create account",
    signup_button: "Create account",
    disabled: "disabled",
    label_email: "Email",
    label_username: "Username",
    label_password: "Password",
    label_confirm_password: "Confirm password",
    label_address: "Address",
    label_detail_address: "Address detail",
    label_phone: "Phone",
};

static KO: Messages = Messages {
    required_email: "이메일을 입력해주세요.",
    required_password: "비밀번호를 입력해주세요.",
    required_confirm_password: "비밀번호 확인을 입력해주세요.",
    required_username: "사용자 이름을 입력해주세요.",
    required_address: "주소를 입력해주세요.",
    invalid_email: "올바른 이메일 형식이 아닙니다.",
    password_too_short: "비밀번호는 8자 이상이어야 합니다.",
    password_mismatch: "비밀번호가 일치하지 않습니다.",
    empty_duplicate_value: "확인할 값을 입력해주세요.",
    duplicate_check_failed: "중복 확인에 실패했습니다. 다시 시도해주세요.",
    taken_fallback: "이미 사용 중입니다.",
    signup_failed: "회원가입에 실패했습니다. 다시 시도해주세요.",
    checking: "확인 중...",
    find_id_registered: "이미 가입된 이메일입니다.",
    find_id_not_registered: "가입되지 않은 이메일입니다.",
    email_available: "사용 가능한 이메일입니다.",
    username_available: "사용 가능한 사용자 이름입니다.",
    unchecked_email: "이메일 중복 확인을 해주세요.",
    unchecked_username: "사용자 이름 중복 확인을 해주세요.",
    submitting: "계정을 생성하는 중...",
    signup_complete: "회원가입이 완료되었습니다.",
    needs_verification: "로그인하기 전에 이메일 인증을 완료해주세요.",
    redirecting: "잠시 후 이동합니다.",
    find_id_title: "아이디 찾기",
    find_id_button: "아이디 찾기",
    signup_title: "회원가입",
    signup_button: "가입하기",
    disabled: "비활성",
    label_email: "이메일",
    label_username: "사용자 이름",
    label_password: "비밀번호",
    label_confirm_password: "비밀번호 확인",
    label_address: "주소",
    label_detail_address: "상세 주소",
    label_phone: "전화번호",
};

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" KO ".parse::<Locale>(), Ok(Locale::Ko));
        assert_eq!("ko-KR".parse::<Locale>(), Ok(Locale::Ko));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn catalogs_differ() {
        assert_ne!(
            Locale::En.messages().invalid_email,
            Locale::Ko.messages().invalid_email
        );
        assert_eq!(Locale::default(), Locale::En);
    }
}
