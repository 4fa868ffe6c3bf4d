use std::{fmt::Display, str::FromStr};

/// Every command understood by the shell, offered for TAB completion at the main prompt
pub const COMMANDS: &[&str] = &[
    "activate trigger",
    "add cluster",
    "add configuration",
    "add profile",
    "add trigger",
    "authors",
    "bye",
    "copyright",
    "deactivate trigger",
    "delete cluster",
    "delete configuration",
    "delete profile",
    "delete trigger",
    "describe configuration",
    "describe profile",
    "describe trigger",
    "disable configuration",
    "enable configuration",
    "exit",
    "help",
    "license",
    "list clusters",
    "list configurations",
    "list profiles",
    "list triggers",
    "login",
    "quit",
    "version",
];

/// Kinds of records kept by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cluster,
    Profile,
    Configuration,
    Trigger,
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cluster" | "clusters" => Ok(Self::Cluster),
            "profile" | "profiles" => Ok(Self::Profile),
            "configuration" | "configurations" => Ok(Self::Configuration),
            "trigger" | "triggers" => Ok(Self::Trigger),
            _ => Err(format!("unknown resource '{s}'")),
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cluster => write!(f, "cluster"),
            Self::Profile => write!(f, "profile"),
            Self::Configuration => write!(f, "configuration"),
            Self::Trigger => write!(f, "trigger"),
        }
    }
}

/// A parsed line of shell input
///
/// Identifiers are optional; the session asks for a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Version,
    License,
    Copyright,
    Login,
    Quit,
    List(Resource),
    Describe(Resource, Option<String>),
    Add(Resource),
    Delete(Resource, Option<String>),
    EnableConfiguration(Option<String>),
    DisableConfiguration(Option<String>),
    ActivateTrigger(Option<String>),
    DeactivateTrigger(Option<String>),
}

impl TryFrom<&str> for ShellCommand {
    type Error = String;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let keywords: Vec<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
        let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();
        let id = words.get(2).map(|id| (*id).to_owned());

        if keywords.len() > 3 {
            return Err(format!("too many arguments in '{}'", input.trim()));
        }

        match keywords.as_slice() {
            [] => Err("empty command".to_owned()),
            ["help"] => Ok(Self::Help),
            ["version"] => Ok(Self::Version),
            ["license"] => Ok(Self::License),
            ["copyright"] | ["authors"] => Ok(Self::Copyright),
            ["login"] => Ok(Self::Login),
            ["quit"] | ["exit"] | ["bye"] => Ok(Self::Quit),
            ["list", resource] => Ok(Self::List(resource.parse()?)),
            ["describe", resource] | ["describe", resource, _] => match resource.parse()? {
                Resource::Cluster => {
                    Err("clusters cannot be described, try 'list clusters'".to_owned())
                }
                resource => Ok(Self::Describe(resource, id)),
            },
            ["add" | "new", resource] => Ok(Self::Add(resource.parse()?)),
            ["delete", resource] | ["delete", resource, _] => {
                Ok(Self::Delete(resource.parse()?, id))
            }
            ["enable", "configuration"] | ["enable", "configuration", _] => {
                Ok(Self::EnableConfiguration(id))
            }
            ["disable", "configuration"] | ["disable", "configuration", _] => {
                Ok(Self::DisableConfiguration(id))
            }
            ["activate", "trigger"] | ["activate", "trigger", _] => Ok(Self::ActivateTrigger(id)),
            ["deactivate", "trigger"] | ["deactivate", "trigger", _] => {
                Ok(Self::DeactivateTrigger(id))
            }
            _ => Err(format!(
                "unknown command '{}', type 'help' for the list of commands",
                input.trim()
            )),
        }
    }
}
