use serde::Deserialize;

use predicat_core::{Example, SymbolTable};

use crate::{Error, PredicatClient};

#[derive(Debug, Deserialize)]
struct SymbolsBody {
    symbols: SymbolTable,
}

#[derive(Debug, Deserialize)]
struct ExamplesBody {
    examples: Vec<Example>,
}

impl PredicatClient {
    /// Fetch the logic symbol table, in table order.
    pub async fn symbols(&self) -> Result<SymbolTable, Error> {
        let body: SymbolsBody = self.get_json("/api/symbols").await?;
        Ok(body.symbols)
    }

    /// Fetch the illustrative example sentences.
    pub async fn examples(&self) -> Result<Vec<Example>, Error> {
        let body: ExamplesBody = self.get_json("/api/examples").await?;
        Ok(body.examples)
    }
}
