#![no_main]

use libfuzzer_sys::fuzz_target;
use threadscope::{analysis, DumpSource, ThreadDumpReader};

fuzz_target!(|data: &[u8]| {
    let source = DumpSource::from_mem(data.to_vec());
    let threads = ThreadDumpReader::new().read_source(&source);
    let _ = analysis::holds(&threads);
    let _ = analysis::most_used_methods(&threads);
});
