use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use passcrypt_core::crypto::DEFAULT_ITERATIONS;
use passcrypt_core::envelope::DEFAULT_SALT_LENGTH;
use passcrypt_core::KeySize;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PasscryptConfig {
    #[serde(default)]
    pub cipher: CipherSection,
    #[serde(default)]
    pub random: RandomSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherSection {
    pub key_size: KeySize,
    pub iterations: u32,
}

impl Default for CipherSection {
    fn default() -> Self {
        Self {
            key_size: KeySize::default(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomSection {
    pub salt_length: usize,
}

impl Default for RandomSection {
    fn default() -> Self {
        Self {
            salt_length: DEFAULT_SALT_LENGTH,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<PasscryptConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn render_config(config: &PasscryptConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))
}

pub fn write_config(path: &Path, config: &PasscryptConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents = render_config(config)?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    set_file_permissions(path)?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("passcrypt"));
        }
    }
    Ok(home_dir()?.join(".config").join("passcrypt"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

fn set_file_permissions(path: &Path) -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PasscryptConfig = toml::from_str("").unwrap();
        assert_eq!(config.cipher.key_size, KeySize::Aes128);
        assert_eq!(config.cipher.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.random.salt_length, DEFAULT_SALT_LENGTH);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PasscryptConfig = toml::from_str("[cipher]\nkey_size = 256\n").unwrap();
        assert_eq!(config.cipher.key_size, KeySize::Aes256);
        assert_eq!(config.cipher.iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_invalid_key_size_rejected() {
        let result: Result<PasscryptConfig, _> = toml::from_str("[cipher]\nkey_size = 64\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = PasscryptConfig::default();
        config.cipher.iterations = 4242;

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();
        assert_eq!(loaded.cipher.iterations, 4242);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_rendered_config_mentions_sections() {
        let rendered = render_config(&PasscryptConfig::default()).unwrap();
        assert!(rendered.contains("[cipher]"));
        assert!(rendered.contains("key_size = 128"));
        assert!(rendered.contains("[random]"));
    }
}
