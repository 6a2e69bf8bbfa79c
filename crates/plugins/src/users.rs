use serde::Deserialize;
use serde_json::Value;
use statprobe_fs::{UserEntry, identity};

use crate::{Lookup, LookupError, Options, parse_options};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UsersOptions {
    /// Return this field of each entry instead of the whole entry
    attribute: Option<String>,
}

/// Password database entries.
///
/// A term that parses as an integer is a uid, anything else a login name.
/// Without terms the result is a single element holding every entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsersLookup;

impl Lookup for UsersLookup {
    fn name(&self) -> &'static str {
        "users"
    }

    fn run_each(
        &self,
        terms: &[String],
        options: &Options,
    ) -> Result<Vec<Result<Value, LookupError>>, LookupError> {
        let options: UsersOptions = parse_options(self.name(), options)?;

        if terms.is_empty() {
            let all = serde_json::to_value(identity::all_users())?;
            return Ok(vec![Ok(all)]);
        }

        let results = terms
            .iter()
            .map(|term| {
                let user = resolve_user(term)?;
                match options.attribute.as_deref() {
                    Some(attr) => select_attribute(&user, attr),
                    None => Ok(serde_json::to_value(user)?),
                }
            })
            .collect();

        Ok(results)
    }
}

fn resolve_user(term: &str) -> Result<UserEntry, LookupError> {
    let found = match term.trim().parse::<u32>() {
        Ok(uid) => identity::user_by_uid(uid),
        Err(_) => identity::user_by_name(term),
    };

    match found {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(LookupError::UserNotFound(term.to_owned())),
        Err(source) => Err(LookupError::UserDatabase {
            term: term.to_owned(),
            source,
        }),
    }
}

fn select_attribute(user: &UserEntry, attribute: &str) -> Result<Value, LookupError> {
    let value = match attribute {
        "pw_name" => Value::from(user.pw_name.as_str()),
        "pw_passwd" => Value::from(user.pw_passwd.as_str()),
        "pw_uid" => Value::from(user.pw_uid),
        "pw_gid" => Value::from(user.pw_gid),
        "pw_gecos" => Value::from(user.pw_gecos.as_str()),
        "pw_dir" => Value::from(user.pw_dir.as_str()),
        "pw_shell" => Value::from(user.pw_shell.as_str()),
        other => return Err(LookupError::UnknownAttribute(other.to_owned())),
    };

    Ok(value)
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
