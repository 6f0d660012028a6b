//! # Configuração do Servidor
//!
//! Lida a partir de variáveis de ambiente na inicialização. Valores ausentes
//! ou inválidos caem nos padrões com um `warn!` no log.
//!
//! | Variável | Padrão | Descrição |
//! |----------|--------|-----------|
//! | `TA_BIND_ADDR` | `0.0.0.0:3000` | Endereço TCP do servidor |
//! | `TA_GOALS` | [`DEFAULT_GOALS`] | Metas avaliadas, separadas por vírgula |
//! | `RUST_LOG` | `info` | Filtro do `tracing_subscriber` (lido em `main`) |
//!
//! ```bash
//! TA_GOALS="Requirements,Design,Tests" RUST_LOG=debug cargo run
//! ```

use std::net::SocketAddr;

/// Metas de aprendizagem avaliadas por padrão (ordem das colunas da grade).
pub const DEFAULT_GOALS: [&str; 6] = [
    "Requirements",
    "Configuration Management",
    "Project Management",
    "Design",
    "Tests",
    "Refactoring",
];

/// Configuração resolvida do processo.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Catálogo fixo de metas, sem repetição, na ordem configurada.
    pub goals: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            goals: DEFAULT_GOALS.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Lê a configuração do ambiente do processo.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve a configuração a partir de uma função de busca
    /// (separada de `from_env` para testes sem mexer no ambiente global).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("TA_BIND_ADDR") {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "TA_BIND_ADDR inválido, usando padrão")
                }
            }
        }

        if let Some(raw) = lookup("TA_GOALS") {
            let goals = parse_goals(&raw);
            if goals.is_empty() {
                tracing::warn!("TA_GOALS vazio, usando metas padrão");
            } else {
                config.goals = goals;
            }
        }

        config
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

/// Divide a lista por vírgulas, descartando vazios e repetições.
fn parse_goals(raw: &str) -> Vec<String> {
    let mut goals: Vec<String> = Vec::new();
    for goal in raw.split(',').map(str::trim).filter(|g| !g.is_empty()) {
        if !goals.iter().any(|g| g == goal) {
            goals.push(goal.to_string());
        }
    }
    goals
}
