//! Knowledge-base keyword matching
//!
//! Maps free-form issue text to at most one article from a fixed catalog.
//! Rules are evaluated in declaration order and the first match wins, so
//! the order of the table is part of the contract.

use crate::models::KnowledgeArticle;

const PASSWORD_RESET_GUIDE: KnowledgeArticle = KnowledgeArticle {
    title: "Password Reset Failure Guide",
    url: "https://sesha3-cxone-prod.atlassian.net/wiki/spaces/~7120200716321e790240d4b41e5f881fde3e4d/pages/851969/Password+Reset+Failure+Guide",
};

const SESSION_EXPIRED_GUIDE: KnowledgeArticle = KnowledgeArticle {
    title: "Session Expired Troubleshooting",
    url: "https://sesha3-cxone-prod.atlassian.net/wiki/spaces/~7120200716321e790240d4b41e5f881fde3e4d/pages/917505/Session+Expired+Troubleshooting",
};

const ACCOUNT_LOCKED_GUIDE: KnowledgeArticle = KnowledgeArticle {
    title: "Account Locked Resolution Steps",
    url: "https://sesha3-cxone-prod.atlassian.net/wiki/spaces/~7120200716321e790240d4b41e5f881fde3e4d/pages/917512/Account+Locked+Resolution+Steps",
};

const SSO_LOGIN_GUIDE: KnowledgeArticle = KnowledgeArticle {
    title: "SSO Login Troubleshooting",
    url: "https://sesha3-cxone-prod.atlassian.net/wiki/spaces/~7120200716321e790240d4b41e5f881fde3e4d/pages/983041/SSO+Login+Troubleshooting",
};

const MFA_GUIDE: KnowledgeArticle = KnowledgeArticle {
    title: "Multi-Factor Authentication Issues",
    url: "https://sesha3-cxone-prod.atlassian.net/wiki/spaces/~7120200716321e790240d4b41e5f881fde3e4d/pages/1081345/Multi-Factor+Authentication+Issues",
};

/// A keyword pattern evaluated against normalized issue text.
///
/// Normalized text is lower-case with every run of non-alphanumeric
/// characters collapsed to a single space, so a two-word phrase either
/// appears with exactly one space between the words or fused together
/// (the source text had no separator at all).
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Two words, adjacent or separated by a single space
    Phrase(&'static str, &'static str),
    /// Any one of the listed substrings
    AnyOf(&'static [&'static str]),
}

impl Pattern {
    fn matches(&self, normalized: &str) -> bool {
        match self {
            Pattern::Phrase(first, second) => {
                normalized.contains(&format!("{} {}", first, second))
                    || normalized.contains(&format!("{}{}", first, second))
            }
            Pattern::AnyOf(needles) => needles.iter().any(|needle| normalized.contains(needle)),
        }
    }
}

struct Rule {
    pattern: Pattern,
    article: KnowledgeArticle,
}

/// The fixed article catalog with its ordered matching rules.
///
/// Constructed once at startup and shared across requests; lookups are
/// pure and never touch the network.
pub struct KnowledgeBase {
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        let rules = vec![
            Rule {
                pattern: Pattern::Phrase("password", "reset"),
                article: PASSWORD_RESET_GUIDE,
            },
            Rule {
                pattern: Pattern::Phrase("session", "expired"),
                article: SESSION_EXPIRED_GUIDE,
            },
            Rule {
                pattern: Pattern::Phrase("account", "locked"),
                article: ACCOUNT_LOCKED_GUIDE,
            },
            Rule {
                pattern: Pattern::AnyOf(&["sso"]),
                article: SSO_LOGIN_GUIDE,
            },
            Rule {
                pattern: Pattern::AnyOf(&["mfa", "otp"]),
                article: MFA_GUIDE,
            },
        ];

        Self { rules }
    }

    /// Find the article for an issue, if any rule matches
    pub fn lookup(&self, summary: &str, description: &str) -> Option<KnowledgeArticle> {
        let combined = normalize(&format!("{} {}", summary, description));
        tracing::debug!("combined text for knowledge lookup: {}", combined);

        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(&combined))
            .map(|rule| rule.article)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize text for keyword matching.
///
/// Lower-cases ASCII letters and replaces every run of characters outside
/// `[a-z0-9]` (punctuation, whitespace, underscores, non-ASCII) with a
/// single space. Idempotent: normalizing normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut last_was_space = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            normalized.push(ch.to_ascii_lowercase());
            last_was_space = false;
        } else if !last_was_space {
            normalized.push(' ');
            last_was_space = true;
        }
    }
    normalized
}
