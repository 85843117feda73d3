use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

// Cache secundário de coleções (SLAs, aplicações), herdeiro do armazenamento
// local do console. É um par get/set injetável; a cópia autoritativa continua
// sendo o banco — as leituras de negócio nunca passam por aqui, e a
// reconciliação entre as duas cópias fica em aberto de propósito.

pub trait KvStore: Send + Sync {
    fn get(&self, chave: &str) -> Option<Value>;
    fn set(&self, chave: &str, valor: Value);
}

/// Implementação em disco: um arquivo JSON por chave dentro do diretório de
/// cache. Falhas de E/S são logadas e engolidas — o cache é melhor-esforço.
pub struct FileKvStore {
    diretorio: PathBuf,
}

impl FileKvStore {
    pub fn new(diretorio: impl Into<PathBuf>) -> Self {
        Self { diretorio: diretorio.into() }
    }

    fn caminho(&self, chave: &str) -> PathBuf {
        // Chaves são nomes simples ("slas", "aplicacoes"); barra vira hífen
        // para nunca escapar do diretório.
        let nome = chave.replace(['/', '\\'], "-");
        self.diretorio.join(format!("{nome}.json"))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, chave: &str) -> Option<Value> {
        let conteudo = fs::read_to_string(self.caminho(chave)).ok()?;
        serde_json::from_str(&conteudo).ok()
    }

    fn set(&self, chave: &str, valor: Value) {
        if let Err(e) = fs::create_dir_all(&self.diretorio) {
            tracing::warn!("Cache: falha ao criar diretório {:?}: {}", self.diretorio, e);
            return;
        }
        match serde_json::to_string_pretty(&valor) {
            Ok(texto) => {
                if let Err(e) = fs::write(self.caminho(chave), texto) {
                    tracing::warn!("Cache: falha ao gravar chave '{}': {}", chave, e);
                }
            }
            Err(e) => tracing::warn!("Cache: falha ao serializar chave '{}': {}", chave, e),
        }
    }
}

/// Implementação em memória, usada nos testes.
#[derive(Default)]
pub struct MemKvStore {
    dados: Mutex<std::collections::HashMap<String, Value>>,
}

impl KvStore for MemKvStore {
    fn get(&self, chave: &str) -> Option<Value> {
        self.dados.lock().unwrap().get(chave).cloned()
    }

    fn set(&self, chave: &str, valor: Value) {
        self.dados.lock().unwrap().insert(chave.to_string(), valor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memoria_guarda_e_devolve() {
        let kv = MemKvStore::default();
        assert!(kv.get("slas").is_none());
        kv.set("slas", json!([{"sigla": "SLA-1"}]));
        let valor = kv.get("slas").unwrap();
        assert_eq!(valor[0]["sigla"], "SLA-1");
    }

    #[test]
    fn sobrescrita_fica_com_o_ultimo_valor() {
        let kv = MemKvStore::default();
        kv.set("aplicacoes", json!([1, 2]));
        kv.set("aplicacoes", json!([3]));
        assert_eq!(kv.get("aplicacoes").unwrap(), json!([3]));
    }
}
