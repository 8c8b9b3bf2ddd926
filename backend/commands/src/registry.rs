/// Trigger registry — the exact slash commands and phrases that identify each intent.
///
/// Built once at startup and shared read-only; adding an alias or a whole
/// intent is a data change in `BUILTIN_TRIGGERS` or in configuration.
use std::collections::{BTreeMap, BTreeSet, HashMap};

use cmdgate_core::{CommandType, GateError};

use crate::normalize::collapse_whitespace;
use crate::types::TriggerKind;

/// Built-in vocabulary: (intent, slash commands, phrases). Italian and English aliases.
const BUILTIN_TRIGGERS: &[(CommandType, &[&str], &[&str])] = &[(
    CommandType::Gallery,
    &["/gallery", "/galleria", "/stili", "/styles"],
    &[
        "mostra gallery",
        "mostra galleria",
        "mostra stili",
        "apri gallery",
        "apri galleria",
        "show gallery",
        "show styles",
        "open gallery",
    ],
)];

// ---------------------------------------------------------------------------
// Trigger validation
// ---------------------------------------------------------------------------

/// Check a slash command: `/`-prefixed, lowercase, no whitespace.
pub fn validate_command(trigger: &str) -> Result<(), GateError> {
    let fail = |reason: &str| {
        Err(GateError::InvalidCommand { trigger: trigger.to_string(), reason: reason.to_string() })
    };
    if !trigger.starts_with('/') {
        return fail("must start with '/'");
    }
    if trigger.len() == 1 {
        return fail("missing command name after '/'");
    }
    if trigger.chars().any(char::is_whitespace) {
        return fail("must not contain whitespace");
    }
    if trigger != trigger.to_lowercase() {
        return fail("must be lowercase");
    }
    Ok(())
}

/// Check a phrase: non-empty, lowercase, single-spaced, not a slash command.
pub fn validate_phrase(trigger: &str) -> Result<(), GateError> {
    let fail = |reason: &str| {
        Err(GateError::InvalidPhrase { trigger: trigger.to_string(), reason: reason.to_string() })
    };
    if trigger.trim().is_empty() {
        return fail("must not be empty");
    }
    if trigger.starts_with('/') {
        return fail("slash triggers belong in the command list");
    }
    if trigger != trigger.to_lowercase() {
        return fail("must be lowercase");
    }
    if trigger != collapse_whitespace(trigger) {
        return fail("must be trimmed and single-spaced");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Trigger set
// ---------------------------------------------------------------------------

/// The two exact-match sets belonging to one intent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSet {
    pub commands: BTreeSet<String>,
    pub phrases: BTreeSet<String>,
}

impl TriggerSet {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.phrases.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable trigger registry. Construct with [`CommandRegistry::builtin`] or
/// [`CommandRegistry::builder`].
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    intents: BTreeMap<CommandType, TriggerSet>,
    commands: HashMap<String, CommandType>,
    phrases: HashMap<String, CommandType>,
}

impl CommandRegistry {
    /// The built-in vocabulary only.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (intent, commands, phrases) in BUILTIN_TRIGGERS {
            for c in *commands {
                registry.commands.insert((*c).to_string(), *intent);
            }
            for p in *phrases {
                registry.phrases.insert((*p).to_string(), *intent);
            }
            let set = registry.intents.entry(*intent).or_default();
            set.commands.extend(commands.iter().map(|c| c.to_string()));
            set.phrases.extend(phrases.iter().map(|p| p.to_string()));
        }
        registry
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    fn empty() -> Self {
        Self { intents: BTreeMap::new(), commands: HashMap::new(), phrases: HashMap::new() }
    }

    /// Exact lookup against slash commands. `normalized` must already be trimmed and lowercased.
    pub fn match_command(&self, normalized: &str) -> Option<CommandType> {
        self.commands.get(normalized).copied()
    }

    /// Exact lookup against phrases. Interior whitespace is collapsed first.
    pub fn match_phrase(&self, normalized: &str) -> Option<CommandType> {
        self.phrases.get(&collapse_whitespace(normalized)).copied()
    }

    /// All intents with their trigger sets, in stable order.
    pub fn intents(&self) -> impl Iterator<Item = (CommandType, &TriggerSet)> {
        self.intents.iter().map(|(k, v)| (*k, v))
    }

    pub fn triggers_for(&self, intent: CommandType) -> Option<&TriggerSet> {
        self.intents.get(&intent)
    }

    pub fn len(&self) -> usize {
        self.commands.len() + self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Collects triggers and validates them all at `build()`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    include_builtin: bool,
    entries: Vec<(CommandType, TriggerKind, String)>,
}

impl RegistryBuilder {
    /// Start from the built-in vocabulary.
    pub fn with_builtin(mut self) -> Self {
        self.include_builtin = true;
        self
    }

    pub fn command(mut self, intent: CommandType, trigger: impl Into<String>) -> Self {
        self.entries.push((intent, TriggerKind::Command, trigger.into()));
        self
    }

    pub fn phrase(mut self, intent: CommandType, trigger: impl Into<String>) -> Self {
        self.entries.push((intent, TriggerKind::Phrase, trigger.into()));
        self
    }

    /// Validate every trigger and freeze the registry.
    ///
    /// Re-registering a trigger for the same intent is a no-op; registering it
    /// for a different intent is a [`GateError::DuplicateTrigger`].
    pub fn build(self) -> Result<CommandRegistry, GateError> {
        let mut registry =
            if self.include_builtin { CommandRegistry::builtin() } else { CommandRegistry::empty() };

        for (intent, kind, trigger) in self.entries {
            if intent.action().is_none() {
                return Err(GateError::UnroutableIntent(intent));
            }
            match kind {
                TriggerKind::Command => validate_command(&trigger)?,
                TriggerKind::Phrase => validate_phrase(&trigger)?,
            }

            let index = match kind {
                TriggerKind::Command => &mut registry.commands,
                TriggerKind::Phrase => &mut registry.phrases,
            };
            match index.get(&trigger) {
                Some(existing) if *existing == intent => continue,
                Some(existing) => {
                    return Err(GateError::DuplicateTrigger { trigger, existing: *existing });
                }
                None => {}
            }
            index.insert(trigger.clone(), intent);

            let set = registry.intents.entry(intent).or_default();
            match kind {
                TriggerKind::Command => set.commands.insert(trigger),
                TriggerKind::Phrase => set.phrases.insert(trigger),
            };
        }

        Ok(registry)
    }
}
