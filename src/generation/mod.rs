// src/generation/mod.rs
// Text-generation gateway: category prompts, provider call, backup substitution

pub mod backup;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{FunError, Result};
use crate::llm::{ChatMessage, LlmProvider};

/// Returned when the provider answers without any text
pub const PLACEHOLDER_TEXT: &str = "抱歉，暂时无法生成内容";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationCategory {
    Joke,
    Fact,
    RandomFood,
    FictionalMenu,
    EasterEgg,
}

/// Fixed persona prompt, request prompt and temperature for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptTemplate {
    pub system: &'static str,
    pub user: &'static str,
    pub temperature: f32,
}

impl GenerationCategory {
    pub const ALL: [GenerationCategory; 5] = [
        GenerationCategory::Joke,
        GenerationCategory::Fact,
        GenerationCategory::RandomFood,
        GenerationCategory::FictionalMenu,
        GenerationCategory::EasterEgg,
    ];

    pub fn template(self) -> PromptTemplate {
        match self {
            GenerationCategory::Joke => PromptTemplate {
                system: "你是一个幽默的美食段子生成器，专门生成搞笑的美食相关文案。文案要简短有趣，贴近生活，让人会心一笑。",
                user: "生成一句搞笑的美食段子，比如关于饿了的感受或者想吃什么的状态",
                temperature: 0.8,
            },
            GenerationCategory::Fact => PromptTemplate {
                system: "你是一个美食冷知识专家，专门提供有趣、奇葩的美食知识。知识要准确但有趣，让人意想不到。",
                user: "生成一个有趣的美食冷知识，要让人意想不到",
                temperature: 0.7,
            },
            GenerationCategory::RandomFood => PromptTemplate {
                system: "你是一个创意菜品推荐师，推荐各种有趣的美食。可以是真实菜品，也可以是创意组合。",
                user: "随机推荐一个菜品，可以是真实的也可以是创意的组合",
                temperature: 0.9,
            },
            GenerationCategory::FictionalMenu => PromptTemplate {
                system: "你是一个创意菜单设计师，专门设计虚构的、有创意的菜单。菜单名称要有想象力，听起来很有趣或者很奇特。",
                user: "生成一个虚构的菜单名称，要有创意和想象力",
                temperature: 0.9,
            },
            GenerationCategory::EasterEgg => PromptTemplate {
                system: "你是一个有趣的彩蛋文字生成器，专门生成让人惊喜的小彩蛋文字。文字要简短有趣，给人惊喜感。",
                user: "生成一句有趣的彩蛋文字，比如获得什么称号或者有什么惊喜",
                temperature: 0.8,
            },
        }
    }

    /// Inline notice shown next to a substituted backup text
    pub fn failure_notice(self) -> &'static str {
        match self {
            GenerationCategory::Joke => "获取美食段子失败，请稍后重试",
            GenerationCategory::Fact => "获取美食冷知识失败，请稍后重试",
            GenerationCategory::RandomFood => "获取AI推荐失败",
            GenerationCategory::FictionalMenu => "生成虚构菜单失败，请稍后重试",
            GenerationCategory::EasterEgg => "获取彩蛋失败，请稍后重试",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenerationCategory::Joke => "joke",
            GenerationCategory::Fact => "fact",
            GenerationCategory::RandomFood => "random_food",
            GenerationCategory::FictionalMenu => "fictional_menu",
            GenerationCategory::EasterEgg => "easter_egg",
        }
    }
}

impl fmt::Display for GenerationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationCategory {
    type Err = FunError;

    fn from_str(s: &str) -> Result<Self> {
        GenerationCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FunError::InvalidInput(format!("unknown generation category: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationSource {
    Provider,
    Backup,
}

/// Text handed to a widget, with where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    pub source: GenerationSource,
    pub notice: Option<String>,
}

impl Generation {
    pub fn provided(text: String) -> Self {
        Self {
            text,
            source: GenerationSource::Provider,
            notice: None,
        }
    }

    pub fn backup(text: impl Into<String>, notice: Option<&str>) -> Self {
        Self {
            text: text.into(),
            source: GenerationSource::Backup,
            notice: notice.map(String::from),
        }
    }

    pub fn is_backup(&self) -> bool {
        self.source == GenerationSource::Backup
    }
}

/// Thin client over a chat-completion provider
#[derive(Clone)]
pub struct Gateway {
    provider: Arc<dyn LlmProvider>,
}

impl Gateway {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// System persona followed by the user request; a seed narrows the request
    pub fn build_messages(category: GenerationCategory, seed: Option<&str>) -> Vec<ChatMessage> {
        let template = category.template();
        let user = match seed {
            Some(seed) => format!("{}。请围绕「{}」来推荐", template.user, seed),
            None => template.user.to_string(),
        };
        vec![ChatMessage::system(template.system), ChatMessage::user(user)]
    }

    /// One provider call. Missing content yields the placeholder text.
    pub async fn generate(&self, category: GenerationCategory, seed: Option<&str>) -> Result<String> {
        let template = category.template();
        let messages = Self::build_messages(category, seed);

        debug!("Generating {} via {}", category, self.provider.name());
        let response = self.provider.chat(messages, template.temperature).await?;

        Ok(response
            .content
            .unwrap_or_else(|| PLACEHOLDER_TEXT.to_string()))
    }

    /// Never fails: provider errors turn into a random backup entry plus a notice
    pub async fn generate_or_backup(&self, category: GenerationCategory) -> Generation {
        match self.generate(category, None).await {
            Ok(text) => Generation::provided(text),
            Err(e) => {
                warn!("Generation of {} failed, using backup: {}", category, e);
                Generation::backup(backup::pick(category), Some(category.failure_notice()))
            }
        }
    }

    /// Elaboration for a wheel outcome; failures substitute silently
    pub async fn elaborate(&self, food_name: &str) -> Generation {
        match self
            .generate(GenerationCategory::RandomFood, Some(food_name))
            .await
        {
            Ok(text) => Generation::provided(text),
            Err(e) => {
                warn!("Elaboration for {} failed, using backup: {}", food_name, e);
                Generation::backup(backup::elaboration_for(food_name), None)
            }
        }
    }
}
