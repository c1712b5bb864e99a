//! # 로그인 세션 저장소 (Auth Session Store)
//!
//! 현재 로그인한 사용자를 들고 있는 상태 머신입니다. 전역 싱글톤이 아니라
//! 호출하는 쪽이 직접 만들어 넘겨주는 값이며, 세션은 `SessionStorage`에 저장됩니다.
//!
//! ## 상태 전이
//! ```text
//! Initializing ──initialize()──▶ Authenticated   (토큰 + 사용자 JSON이 모두 있고 파싱됨)
//!              └──────────────▶ Unauthenticated (없거나 파싱 실패 → 저장소 비움)
//! Unauthenticated ──login() 성공──▶ Authenticated
//! Authenticated   ──logout()─────▶ Unauthenticated
//! ```
//! 종료 상태는 없습니다. 두 상태를 계속 오갑니다.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::api::MockApi;
use crate::error::{ApiError, AppResult};
use crate::models::{LoginCredentials, User};

/// 토큰이 저장되는 키
pub const AUTH_TOKEN_KEY: &str = "auth-token";
/// 사용자 JSON이 저장되는 키
pub const USER_DATA_KEY: &str = "user-data";

/// 문자열 키-값 세션 저장소. 브라우저의 sessionStorage와 같은 모양입니다.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// 메모리 세션 저장소. 복제본끼리 같은 맵을 공유하므로
/// 복제본으로 새 `AuthSession`을 만들면 "페이지 새로고침"과 같습니다.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| ApiError::Unknown("session storage lock poisoned".to_string()))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items()?.remove(key);
        Ok(())
    }
}

/// JSON 객체 파일 하나에 세션을 저장합니다.
///
/// 파일이 없으면 빈 저장소로 취급합니다. 버전이나 마이그레이션은 없습니다.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 파일 내용을 읽습니다. 두 번째 값은 파일이 깨져 있었는지 여부입니다.
    ///
    /// 해석할 수 없는 파일은 빈 저장소로 취급하고, 다음 쓰기에서 덮어씁니다.
    fn read(&self) -> AppResult<(BTreeMap<String, String>, bool)> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok((BTreeMap::new(), false)),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok((items, false)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                Ok((BTreeMap::new(), true))
            }
        }
    }

    fn write(&self, items: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| ApiError::Unknown(e.to_string()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let (mut items, _) = self.read()?;
        Ok(items.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let (mut items, _) = self.read()?;
        items.insert(key.to_string(), value.to_string());
        self.write(&items)
    }

    // 깨진 파일은 키가 없어도 빈 객체로 다시 씁니다.
    fn remove_item(&self, key: &str) -> AppResult<()> {
        let (mut items, corrupt) = self.read()?;
        if items.remove(key).is_some() || corrupt {
            self.write(&items)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Initializing,
    Unauthenticated,
    Authenticated { user: User, token: String },
}

/// 로그인 세션. 화면 트리 전체에 이 값을 넘겨 현재 사용자를 공유합니다.
pub struct AuthSession<S> {
    api: MockApi,
    storage: S,
    state: AuthState,
}

impl<S: SessionStorage> AuthSession<S> {
    /// `Initializing` 상태로 시작합니다. `initialize()`를 불러야 저장된 세션을 읽습니다.
    pub fn new(api: MockApi, storage: S) -> Self {
        Self {
            api,
            storage,
            state: AuthState::Initializing,
        }
    }

    /// 저장소에서 토큰과 사용자 정보를 읽어 초기 상태를 정합니다.
    ///
    /// 온전한 세션이 없으면(키 하나만 있거나, 사용자 JSON이나 저장소 파일이 깨져 있으면)
    /// 에러로 올리지 않고 두 키를 지운 뒤 로그인 안 된 상태로 시작합니다.
    pub fn initialize(&mut self) -> &AuthState {
        match self.restore() {
            Ok(Some((user, token))) => {
                tracing::debug!(user_id = %user.id, "Restored session");
                self.state = AuthState::Authenticated { user, token };
            }
            outcome => {
                if let Err(e) = outcome {
                    tracing::warn!("Discarding stored session: {}", e);
                }
                if let Err(e) = self.clear() {
                    tracing::warn!("Failed to clear session storage: {}", e);
                }
                self.state = AuthState::Unauthenticated;
            }
        }
        &self.state
    }

    fn restore(&self) -> AppResult<Option<(User, String)>> {
        let token = self.storage.get_item(AUTH_TOKEN_KEY)?;
        let user_data = self.storage.get_item(USER_DATA_KEY)?;

        let (Some(token), Some(user_data)) = (token, user_data) else {
            return Ok(None);
        };
        if token.is_empty() || user_data.is_empty() {
            return Ok(None);
        }

        let user: User = serde_json::from_str(&user_data)
            .map_err(|e| ApiError::Unknown(format!("Failed to parse user data: {e}")))?;
        Ok(Some((user, token)))
    }

    fn clear(&self) -> AppResult<()> {
        self.storage.remove_item(AUTH_TOKEN_KEY)?;
        self.storage.remove_item(USER_DATA_KEY)
    }

    /// Mock API로 로그인하고, 성공하면 토큰과 사용자를 저장소에 기록합니다.
    ///
    /// 실패하면 상태는 그대로이고 에러를 호출한 쪽(로그인 폼)에 돌려줍니다.
    pub async fn login(&mut self, email: &str, password: &str) -> AppResult<&User> {
        let credentials = LoginCredentials::new(email, password);
        let response = self.api.login(&credentials).await?;
        let user = response.data.user;
        let token = response.data.token;

        let user_json =
            serde_json::to_string(&user).map_err(|e| ApiError::Unknown(e.to_string()))?;
        self.storage.set_item(AUTH_TOKEN_KEY, &token)?;
        self.storage.set_item(USER_DATA_KEY, &user_json)?;

        self.state = AuthState::Authenticated { user, token };
        self.require_user()
    }

    /// 저장소를 즉시 비우고 로그인 안 된 상태로 돌아갑니다.
    pub fn logout(&mut self) -> AppResult<()> {
        self.clear()?;
        self.state = AuthState::Unauthenticated;
        tracing::debug!("Session cleared");
        Ok(())
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        match &self.state {
            AuthState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    /// `Initializing` 동안에만 true
    pub fn is_loading(&self) -> bool {
        self.state == AuthState::Initializing
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// 라우트 가드: 로그인 안 된 사용자는 `Unauthorized`
    pub fn require_user(&self) -> AppResult<&User> {
        self.user().ok_or(ApiError::Unauthorized)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
