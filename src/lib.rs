/*! # conll-ssf

Conversion of CoNLL annotated files into SSF (Shakti Standard Format), for POS tagging and chunking data.

CoNLL input (`token \t pos \t chunk`, blank line between sentences):

```text
Dog	NN	B-NP
barks	VM	B-VGF
```

SSF output, in chunk mode:

```text
<Sentence id='1'>
1	((	NP	
1.1	Dog	NN	
	))
2	((	VGF	
2.1	barks	VM	
	))
</Sentence>
```

Chunking input goes through [transformers::TagRepair] before conversion.
The library can be used on in-memory lines with [pipelines::convert_lines],
or on whole directories with [pipelines::Convert].
!*/
pub mod conll;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod ssf;
pub mod transformers;

pub use conll::Mode;
pub use error::Error;
