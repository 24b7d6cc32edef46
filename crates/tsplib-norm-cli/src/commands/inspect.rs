//! Inspect command: summarize one TSPLIB file without writing anything.

use super::validate_path;
use crate::error::Result;
use std::path::Path;
use tsplib_norm::{convert_file, ProblemRecord};

pub(crate) fn run(file: &Path, json: bool) -> Result<()> {
    validate_path(file)?;
    let record = convert_file(file)?;

    if json {
        println!("{}", summary_json(&record)?);
    } else {
        print_summary(&record);
    }
    Ok(())
}

fn summary_json(record: &ProblemRecord) -> Result<String> {
    let value = serde_json::json!({
        "name": record.name,
        "type": record.problem_type,
        "dimension": record.dimension,
        "edge_weight_type": record.edge_weight_type,
        "matrix_format": record.edge_weights.as_ref().map(|m| m.matrix_format.as_str()),
        "matrix_dimension": record.edge_weights.as_ref().map(|m| m.dimension),
        "is_symmetric": record.edge_weights.as_ref().map(|m| m.is_symmetric),
        "tours": record.tours.len(),
        "depots": record.depots.len(),
        "demands": record.demands.len(),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

fn print_summary(record: &ProblemRecord) {
    println!("Name:          {}", record.name);
    println!("Type:          {}", record.problem_type);
    if let Some(comment) = &record.comment {
        println!("Comment:       {comment}");
    }
    println!("Dimension:     {}", record.dimension);
    if let Some(capacity) = record.capacity {
        println!("Capacity:      {capacity}");
    }
    if let Some(kind) = &record.edge_weight_type {
        println!("Weight type:   {kind}");
    }
    match &record.edge_weights {
        Some(m) => {
            println!("Matrix format: {}", m.matrix_format);
            println!("Matrix size:   {0} x {0}", m.dimension);
            println!("Symmetric:     {}", m.is_symmetric);
        }
        None => println!("Matrix:        (none)"),
    }
    if !record.tours.is_empty() {
        println!("Tours:         {}", record.tours.len());
    }
    if !record.depots.is_empty() {
        println!("Depots:        {:?}", record.depots);
    }
    if !record.demands.is_empty() {
        println!("Demands:       {}", record.demands.len());
    }
}
