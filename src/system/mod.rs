//! System-level services shared by the watchface

pub mod time;
