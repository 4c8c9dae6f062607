use crate::domain::ports::TypeRegistry;
use std::collections::HashMap;

/// API 回傳的 discriminator 與 factory 型別 key 不同的情況
const BUILTIN_ALIASES: &[(&str, &str)] = &[("$list", "page")];

/// 預設的型別對照，沒有別名的字串原樣回傳
#[derive(Debug, Clone)]
pub struct KlaviyoTypeRegistry {
    aliases: HashMap<String, String>,
}

impl KlaviyoTypeRegistry {
    /// 在內建別名上疊加自訂別名，同名時自訂優先
    pub fn with_aliases<I, K, V>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut registry = Self::default();
        for (raw, canonical) in aliases {
            registry.aliases.insert(raw.into(), canonical.into());
        }
        registry
    }

    pub fn aliases(&self) -> &HashMap<String, String> {
        &self.aliases
    }
}

impl Default for KlaviyoTypeRegistry {
    fn default() -> Self {
        Self {
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
                .collect(),
        }
    }
}

impl TypeRegistry for KlaviyoTypeRegistry {
    fn canonical_type(&self, raw: &str) -> String {
        self.aliases
            .get(raw)
            .cloned()
            .unwrap_or_else(|| raw.to_string())
    }
}
