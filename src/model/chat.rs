use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One transcript entry, in the wire shape the completion endpoint expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The four assistant use cases. Each is bound to one fixed system
/// instruction chosen when a chat session starts and reused for every
/// message in that session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatPurpose {
    StudentSupport,
    Recommendations,
    ContentGeneration,
    SmartSearch,
}

impl ChatPurpose {
    pub const ALL: [ChatPurpose; 4] = [
        ChatPurpose::StudentSupport,
        ChatPurpose::Recommendations,
        ChatPurpose::ContentGeneration,
        ChatPurpose::SmartSearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChatPurpose::StudentSupport => "student-support",
            ChatPurpose::Recommendations => "recommendations",
            ChatPurpose::ContentGeneration => "content-generation",
            ChatPurpose::SmartSearch => "smart-search",
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            ChatPurpose::StudentSupport => {
                "You are a helpful assistant for Campus Circle students. Provide accurate, \
                 concise information about majors, campus policies, and resources available \
                 to students. Be respectful and supportive."
            }
            ChatPurpose::Recommendations => {
                "You are a recommendation system for Campus Circle students. Based on the \
                 user's major, interests, and academic level, suggest relevant resources, \
                 study materials, and peer connections that would be beneficial for their \
                 academic journey."
            }
            ChatPurpose::ContentGeneration => {
                "You are an educational content generator. Create clear, concise summaries, \
                 explanations, or educational content on requested topics. Focus on accuracy \
                 and clarity in your explanations."
            }
            ChatPurpose::SmartSearch => {
                "You are a search assistant for educational resources. Help users find the \
                 most relevant materials, books, courses, and community resources based on \
                 their queries. Prioritize resources that match their academic level and \
                 learning goals."
            }
        }
    }
}

impl fmt::Display for ChatPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChatPurpose {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student-support" | "support" => Ok(ChatPurpose::StudentSupport),
            "recommendations" => Ok(ChatPurpose::Recommendations),
            "content-generation" | "content" => Ok(ChatPurpose::ContentGeneration),
            "smart-search" | "search" => Ok(ChatPurpose::SmartSearch),
            other => Err(anyhow::anyhow!(
                "unknown purpose {:?} (expected student-support, recommendations, \
                 content-generation or smart-search)",
                other
            )),
        }
    }
}
