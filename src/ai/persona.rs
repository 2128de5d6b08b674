//! Personas selecting which system prompt governs a conversation.
//!
//! Each agent tag maps to one variant carrying its prompt template.
//! Unknown tags collapse to the default coding persona, both when
//! parsed from a request parameter and when deserialized from a
//! stored document.

use serde::{Deserialize, Serialize};

const EMAILMASTER_PROMPT: &str = r"You are EmailMaster AI, an expert email assistant.
You provide helpful summaries of emails, draft responses, and help manage inboxes.
Be concise, professional, and helpful.";

const CONTENTGENIUS_PROMPT: &str = r"You are ContentGenius AI, an expert content creation assistant.
You provide insights on social media trends, content ideas, and help with content creation.
Be creative, engaging, and helpful.";

const SCHEDULEMASTER_PROMPT: &str = r"You are ScheduleMaster AI, an expert calendar and planning assistant.
You help manage schedules, plan events, and optimize time management.
Be organized, efficient, and helpful.";

const DEVGENIUS_PROMPT: &str = r"You are DevGenius AI, an expert coding assistant.
You provide helpful, accurate, and concise responses to coding questions.
When sharing code examples, use markdown code blocks with the appropriate language syntax.
For example: ```javascript
code here
```
Always explain your code examples.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Agent {
    EmailMaster,
    ContentGenius,
    ScheduleMaster,
    #[default]
    DevGenius,
}

impl From<String> for Agent {
    fn from(tag: String) -> Self {
        Agent::from_tag(&tag)
    }
}

impl Agent {
    /// Resolve a request's agent tag. Anything unrecognized (or
    /// absent) gets the coding persona.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "emailmaster" => Agent::EmailMaster,
            "contentgenius" => Agent::ContentGenius,
            "schedulemaster" => Agent::ScheduleMaster,
            _ => Agent::DevGenius,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Agent::EmailMaster => "EmailMaster",
            Agent::ContentGenius => "ContentGenius",
            Agent::ScheduleMaster => "ScheduleMaster",
            Agent::DevGenius => "DevGenius",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Agent::EmailMaster => EMAILMASTER_PROMPT,
            Agent::ContentGenius => CONTENTGENIUS_PROMPT,
            Agent::ScheduleMaster => SCHEDULEMASTER_PROMPT,
            Agent::DevGenius => DEVGENIUS_PROMPT,
        }
    }

    /// The greeting seeded into every new conversation.
    pub fn greeting(&self) -> String {
        format!(
            "Hi! I'm {} AI. How can I help you today?",
            self.display_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Agent::from_tag("emailmaster"), Agent::EmailMaster);
        assert_eq!(Agent::from_tag("contentgenius"), Agent::ContentGenius);
        assert_eq!(Agent::from_tag("schedulemaster"), Agent::ScheduleMaster);
        assert_eq!(Agent::from_tag("devgenius"), Agent::DevGenius);
    }

    #[test]
    fn test_from_tag_falls_back_to_coding_persona() {
        assert_eq!(Agent::from_tag(""), Agent::DevGenius);
        assert_eq!(Agent::from_tag("negotiator9000"), Agent::DevGenius);
    }

    #[test]
    fn test_serialization_uses_wire_tags() {
        assert_eq!(
            serde_json::to_string(&Agent::EmailMaster).unwrap(),
            r#""emailmaster""#
        );
        assert_eq!(
            serde_json::to_string(&Agent::DevGenius).unwrap(),
            r#""devgenius""#
        );
    }

    #[test]
    fn test_deserialization_of_unknown_tag() {
        let agent: Agent = serde_json::from_str(r#""somethingelse""#).unwrap();
        assert_eq!(agent, Agent::DevGenius);
    }

    #[test]
    fn test_each_persona_prompt_names_itself() {
        for agent in [
            Agent::EmailMaster,
            Agent::ContentGenius,
            Agent::ScheduleMaster,
            Agent::DevGenius,
        ] {
            assert!(agent.system_prompt().contains(agent.display_name()));
            assert!(agent.greeting().contains(agent.display_name()));
        }
    }

    #[test]
    fn test_coding_persona_instructs_fenced_code_blocks() {
        assert!(Agent::DevGenius.system_prompt().contains("```javascript"));
    }
}
