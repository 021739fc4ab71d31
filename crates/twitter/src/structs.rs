use serde::{Deserialize, Deserializer, Serialize};

/// 検索 API が返す投稿 1 件分
///
/// API はリクエストで要求されなかったフィールドを省略するので、
/// 欠けているもの・null のものはすべてデフォルト値で埋める。
/// 書き出すときは空のフィールドを省く。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(skip_serializing_if = "is_none_or_empty")]
    pub author_id: Option<String>,
    #[serde(skip_serializing_if = "is_none_or_empty")]
    pub conversation_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(skip_serializing_if = "is_none_or_empty")]
    pub in_reply_to_user_id: Option<String>,
    #[serde(skip_serializing_if = "is_none_or_empty")]
    pub lang: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub possibly_sensitive: bool,
    #[serde(skip_serializing_if = "is_none_or_empty")]
    pub reply_settings: Option<String>,
    #[serde(skip_serializing_if = "is_none_or_empty")]
    pub source: Option<String>,
}

/// search recent tweets のレスポンス
///
/// 成功時は `data` に投稿が入り、失敗時は `title` / `detail` / `type` に
/// problem detail が入る。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Post>,
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub detail: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "is_none_or_empty")]
    pub error_type: Option<String>,
}

/// null はキーが無い場合と同じく、デフォルト値として扱う
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn is_none_or_empty(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn is_false(value: &bool) -> bool {
    !*value
}
