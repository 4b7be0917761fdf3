//! File templates for `spabuild new` and `spabuild init`.
//!
//! The layout matches the default configuration: `src/main.js` is the `main`
//! entry and `src` is the target of the `@` alias.

use serde_json::json;

use crate::error::Result;

/// Entry module mounting the root component.
pub const MAIN_JS: &str = r#"import { createApp } from 'vue'
import App from '@/App.vue'

createApp(App).mount('#app')
"#;

pub const GITIGNORE: &str = "node_modules/\nbuild/\n";

/// Root single-file component.
pub fn app_vue(project_name: &str) -> String {
    format!(
        r#"<script setup>
const title = '{project_name}'
</script>

<template>
  <h1>{{{{ title }}}}</h1>
</template>
"#
    )
}

/// `package.json` declaring the bundler and the default plugins.
pub fn package_json(project_name: &str) -> Result<String> {
    let manifest = json!({
        "name": project_name,
        "private": true,
        "version": "0.0.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "vite build"
        },
        "dependencies": {
            "vue": "^3.5.0"
        },
        "devDependencies": {
            "@vitejs/plugin-vue": "^5.2.0",
            "vite": "^6.0.0",
            "vite-plugin-vue-devtools": "^7.7.0"
        }
    });

    Ok(format!("{}\n", serde_json::to_string_pretty(&manifest)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_vue_embeds_name_and_keeps_mustache() {
        let app = app_vue("shop");
        assert!(app.contains("const title = 'shop'"));
        assert!(app.contains("<h1>{{ title }}</h1>"));
    }

    #[test]
    fn package_json_lists_default_plugins() {
        let value: serde_json::Value =
            serde_json::from_str(&package_json("shop").unwrap()).unwrap();
        assert_eq!(value["name"], "shop");
        assert!(value["devDependencies"]["@vitejs/plugin-vue"].is_string());
        assert!(value["devDependencies"]["vite-plugin-vue-devtools"].is_string());
    }

    #[test]
    fn main_js_imports_through_alias() {
        assert!(MAIN_JS.contains("from '@/App.vue'"));
    }
}
